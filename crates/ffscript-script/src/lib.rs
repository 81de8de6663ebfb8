//! # ffscript-script
//!
//! Script generation engine for ffscript.
//!
//! This crate turns a list of command lines into a shell script for one of
//! four dialects:
//! - PowerShell, where every command runs through an `Invoke-Call` guard that
//!   exits on the first non-zero exit code
//! - Batch, where every command jumps to an `:error` label on failure
//! - Bash, with `set -euxo pipefail` at the top
//! - Text, a plain listing that is never executed
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use ffscript_script::{ScriptBuilder, ScriptDialect};
//!
//! let mut script = ScriptBuilder::new(ScriptDialect::Batch);
//! script.add_command("echo hi")?;
//! let path = script.finalize("out")?;
//! assert_eq!(path.to_str(), Some("out.bat"));
//! # Ok::<(), ffscript_common::Error>(())
//! ```

pub mod builder;
pub mod dialect;
pub mod template;

// Re-exports
pub use builder::{BuilderState, ScriptBuilder, LINE_ENDING};
pub use dialect::{DialectDescriptor, ScriptDialect};
pub use template::TemplateContext;
