//! Ordered command buffer that serializes into a script file.

use crate::dialect::ScriptDialect;
use ffscript_common::{Error, Result};
use std::path::{Path, PathBuf};

/// Separator placed between serialized commands.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Separator placed between serialized commands.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Lifecycle of a [`ScriptBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No command has been added yet.
    Empty,
    /// At least one command has been added.
    Accumulating,
    /// The script was written; no further operations are accepted.
    Finalized,
}

/// Append-only list of commands for one dialect.
///
/// Commands keep their insertion order, which is the order they run in the
/// generated script. [`finalize`](Self::finalize) is terminal: any call after
/// it fails with [`Error::InvalidState`].
///
/// # Example
///
/// ```no_run
/// use ffscript_script::{ScriptBuilder, ScriptDialect};
///
/// let mut script = ScriptBuilder::new(ScriptDialect::Bash);
/// script.add_command(r#"ffmpeg -hide_banner -i "a.mkv" -codec copy "a.mp4""#)?;
/// script.delete_file("a.mkv")?;
/// let written = script.finalize("run-ffmpeg")?;
/// assert_eq!(written.to_str(), Some("run-ffmpeg.sh"));
/// # Ok::<(), ffscript_common::Error>(())
/// ```
#[derive(Debug)]
pub struct ScriptBuilder {
    dialect: ScriptDialect,
    commands: Vec<String>,
    state: BuilderState,
}

impl ScriptBuilder {
    /// Create an empty builder for a dialect.
    pub fn new(dialect: ScriptDialect) -> Self {
        Self {
            dialect,
            commands: Vec::new(),
            state: BuilderState::Empty,
        }
    }

    pub fn dialect(&self) -> ScriptDialect {
        self.dialect
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Serialized commands added so far, in execution order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Wrap a raw command in the dialect's command template and append it.
    pub fn add_command(&mut self, command: &str) -> Result<()> {
        self.ensure_open("add a command")?;
        self.push(command);
        Ok(())
    }

    /// Append a delete command for `path`. Does nothing for dialects without
    /// a delete template.
    pub fn delete_file(&mut self, path: &str) -> Result<()> {
        self.ensure_open("delete a file")?;
        if let Some(command) = self.dialect.delete_command(path) {
            self.push(&command);
        }
        Ok(())
    }

    /// Render the full script as `finalize` would write it for `base`,
    /// without changing the builder.
    pub fn render<P: AsRef<Path>>(&self, base: P) -> String {
        let output = self.script_path(base);
        self.render_to(&output)
    }

    /// Write the script to `<base>.<extension>` and return that path.
    ///
    /// Self-deleting dialects get a delete command for the script itself as
    /// the last command. An existing file at the path is overwritten.
    pub fn finalize<P: AsRef<Path>>(&mut self, base: P) -> Result<PathBuf> {
        self.ensure_open("finalize")?;

        let output = self.script_path(base);
        let content = self.render_to(&output);
        std::fs::write(&output, content)?;

        if let Some(command) = self.self_delete_command(&output) {
            self.commands.push(command);
        }
        self.state = BuilderState::Finalized;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Wrote {} script with {} commands to {:?}",
            self.dialect,
            self.commands.len(),
            output
        );

        Ok(output)
    }

    fn render_to(&self, output: &Path) -> String {
        let mut commands = self.commands.clone();
        commands.extend(self.self_delete_command(output));
        self.dialect.wrap_script(&commands.join(LINE_ENDING))
    }

    fn self_delete_command(&self, output: &Path) -> Option<String> {
        if !self.dialect.supports_self_delete() {
            return None;
        }
        self.dialect
            .delete_command(&output.display().to_string())
            .map(|command| self.dialect.wrap_command(&command))
    }

    /// Path `finalize` writes to for `base`: `<base>.<extension>`.
    pub fn script_path<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        let base = base.as_ref();
        let mut name = base.as_os_str().to_os_string();
        name.push(".");
        name.push(self.dialect.extension());
        PathBuf::from(name)
    }

    fn push(&mut self, command: &str) {
        self.commands.push(self.dialect.wrap_command(command));
        self.state = BuilderState::Accumulating;
    }

    fn ensure_open(&self, operation: &str) -> Result<()> {
        if self.state == BuilderState::Finalized {
            return Err(Error::invalid_state(format!(
                "cannot {} after the script was finalized",
                operation
            )));
        }
        Ok(())
    }
}
