//! Script dialects and their serialization templates.
//!
//! Each dialect is a fixed [`DialectDescriptor`]: a whole-script template, a
//! per-command wrapper, an optional delete template, a file extension and a
//! flag for self-deletion. Templates use the `{script}`, `{command}` and
//! `{path}` tokens understood by [`TemplateContext`].

use crate::template::{TemplateContext, COMMAND_VAR, PATH_VAR, SCRIPT_VAR};
use std::fmt;
use std::str::FromStr;

/// Target shell flavor of a generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptDialect {
    /// Windows PowerShell (`.ps1`)
    #[default]
    PowerShell,
    /// Windows batch file (`.bat`)
    Batch,
    /// POSIX bash script (`.sh`)
    Bash,
    /// Plain listing of the commands (`.txt`), never executed
    Text,
}

/// Serialization rules for one dialect.
#[derive(Debug, PartialEq, Eq)]
pub struct DialectDescriptor {
    /// Wraps the joined command list.
    pub script_template: &'static str,
    /// Wraps a single command.
    pub command_template: &'static str,
    /// Deletes a single file; `None` suppresses deletes entirely.
    pub delete_template: Option<&'static str>,
    /// Script file extension without the leading dot.
    pub extension: &'static str,
    /// Whether the script deletes itself as its last command.
    pub self_delete: bool,
}

const POWERSHELL: DialectDescriptor = DialectDescriptor {
    script_template: r#"function Invoke-Call {
    param (
        [scriptblock]$ScriptBlock,
        [string]$ErrorAction = $ErrorActionPreference
    ) & @ScriptBlock
    if (($lastexitcode -ne 0) -and $ErrorAction -eq "Stop") {
        exit $lastexitcode
    }
}

{script}
"#,
    command_template: "Invoke-Call -ScriptBlock {\n    {command}\n} -ErrorAction Stop",
    delete_template: Some(r#"Remove-Item -Force "{path}""#),
    extension: "ps1",
    self_delete: true,
};

const BATCH: DialectDescriptor = DialectDescriptor {
    script_template: "{script}\n:error\nexit /b %errorlevel%\n",
    command_template: "{command} || goto :error",
    delete_template: Some(r#"del "{path}""#),
    extension: "bat",
    self_delete: true,
};

const BASH: DialectDescriptor = DialectDescriptor {
    script_template: "#!/bin/bash\nset -euxo pipefail\n{script}\n",
    command_template: "{command}",
    delete_template: Some(r#"rm -f "{path}""#),
    extension: "sh",
    self_delete: true,
};

const TEXT: DialectDescriptor = DialectDescriptor {
    script_template: "{script}\n",
    command_template: "{command}",
    delete_template: None,
    extension: "txt",
    self_delete: false,
};

impl ScriptDialect {
    /// All dialects, in the order they are listed to users.
    pub const ALL: [ScriptDialect; 4] = [
        ScriptDialect::PowerShell,
        ScriptDialect::Batch,
        ScriptDialect::Bash,
        ScriptDialect::Text,
    ];

    /// The fixed descriptor for this dialect.
    pub fn descriptor(self) -> &'static DialectDescriptor {
        match self {
            ScriptDialect::PowerShell => &POWERSHELL,
            ScriptDialect::Batch => &BATCH,
            ScriptDialect::Bash => &BASH,
            ScriptDialect::Text => &TEXT,
        }
    }

    /// Name accepted by `--script-type`.
    pub fn name(self) -> &'static str {
        match self {
            ScriptDialect::PowerShell => "powershell",
            ScriptDialect::Batch => "batch",
            ScriptDialect::Bash => "bash",
            ScriptDialect::Text => "text",
        }
    }

    /// Script file extension without the leading dot.
    pub fn extension(self) -> &'static str {
        self.descriptor().extension
    }

    /// Whether finalized scripts delete themselves.
    pub fn supports_self_delete(self) -> bool {
        self.descriptor().self_delete
    }

    /// Wrap a raw command line in this dialect's command template.
    pub fn wrap_command(self, command: &str) -> String {
        TemplateContext::new()
            .with_var(COMMAND_VAR, command)
            .substitute(self.descriptor().command_template)
    }

    /// Render the raw delete command for `path`, or `None` when this dialect
    /// suppresses deletes.
    pub fn delete_command(self, path: &str) -> Option<String> {
        self.descriptor()
            .delete_template
            .map(|template| TemplateContext::new().with_var(PATH_VAR, path).substitute(template))
    }

    /// Wrap an already joined command list in the whole-script template.
    pub fn wrap_script(self, body: &str) -> String {
        TemplateContext::new()
            .with_var(SCRIPT_VAR, body)
            .substitute(self.descriptor().script_template)
    }
}

impl fmt::Display for ScriptDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScriptDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "powershell" => Ok(ScriptDialect::PowerShell),
            "batch" => Ok(ScriptDialect::Batch),
            "bash" => Ok(ScriptDialect::Bash),
            "text" => Ok(ScriptDialect::Text),
            _ => Err(format!("Invalid script type \"{}\"", s)),
        }
    }
}
