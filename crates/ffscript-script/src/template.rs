//! Variable substitution for script templates.

use std::collections::HashMap;

/// Token replaced by the joined command list in a whole-script template.
pub const SCRIPT_VAR: &str = "script";

/// Token replaced by a raw command line in a command template.
pub const COMMAND_VAR: &str = "command";

/// Token replaced by the target path in a delete template.
pub const PATH_VAR: &str = "path";

/// Variable substitution context for script templates.
///
/// Supports variable substitution in strings using the `{varname}` syntax.
/// Braces that do not form a known `{varname}` token are left untouched,
/// which keeps PowerShell script blocks intact.
///
/// # Example
///
/// ```
/// use ffscript_script::TemplateContext;
///
/// let ctx = TemplateContext::new().with_var("command", "echo hi");
///
/// assert_eq!(ctx.substitute("{command} || goto :error"), "echo hi || goto :error");
/// assert_eq!(ctx.substitute("& { {command} }"), "& { echo hi }");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty template context.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Add a variable.
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Substitute variables in a template.
    ///
    /// The template is scanned once from left to right, so substituted values
    /// are never rescanned. A command that happens to contain `{path}` is
    /// emitted verbatim.
    pub fn substitute(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let tail = &rest[open..];

            let replaced = tail[1..].find('}').and_then(|close| {
                let key = &tail[1..=close];
                self.vars.get(key).map(|value| (value, close + 2))
            });

            match replaced {
                Some((value, consumed)) => {
                    result.push_str(value);
                    rest = &tail[consumed..];
                }
                None => {
                    result.push('{');
                    rest = &tail[1..];
                }
            }
        }

        result.push_str(rest);
        result
    }
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::new()
    }
}
