use ffscript_common::FileMatcher;
use ffscript_script::ScriptDialect;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ffmpeg arguments used when none are configured.
pub const DEFAULT_COMMAND: &str = "-codec copy";

/// Output extension used when none is configured.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "mp4";

/// Base name of the generated script, without extension.
pub const DEFAULT_SCRIPT_NAME: &str = "run-ffmpeg";

/// Binary written at the start of every generated command.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Settings read from a TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    /// ffmpeg arguments placed between the input and the output file
    #[serde(default)]
    pub command: Option<String>,

    /// Output extension without the leading dot
    #[serde(default)]
    pub out: Option<String>,

    /// Pipe separated list of source extensions
    #[serde(default)]
    pub extensions: Option<String>,

    /// Case-insensitive pattern of basenames to skip
    #[serde(default)]
    pub exclude: Option<String>,

    #[serde(default)]
    pub script_type: Option<String>,

    #[serde(default)]
    pub recursive: Option<bool>,

    #[serde(default)]
    pub delete_source: Option<bool>,

    #[serde(default)]
    pub script_name: Option<String>,

    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
}

/// Fully resolved settings for one run. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory to scan; the script is written here too
    pub root: PathBuf,

    /// Binary name or path written into every command
    pub ffmpeg: String,

    /// Opaque ffmpeg arguments spliced between input and output
    pub command: String,

    pub output_extension: String,

    /// Source extension and exclude patterns
    pub matcher: FileMatcher,

    pub recursive: bool,

    pub delete_source: bool,

    pub dialect: ScriptDialect,

    pub script_name: String,

    /// Print the script instead of writing it
    pub dry_run: bool,
}

impl Config {
    /// Settings with every default applied, scanning `root`.
    pub fn with_defaults(root: impl Into<PathBuf>) -> ffscript_common::Result<Self> {
        Ok(Self {
            root: root.into(),
            ffmpeg: DEFAULT_FFMPEG.to_string(),
            command: DEFAULT_COMMAND.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            matcher: FileMatcher::videos()?,
            recursive: false,
            delete_source: false,
            dialect: ScriptDialect::default(),
            script_name: DEFAULT_SCRIPT_NAME.to_string(),
            dry_run: false,
        })
    }

    /// Path the script is written to, minus the dialect extension.
    pub fn script_base(&self) -> PathBuf {
        self.root.join(&self.script_name)
    }
}
