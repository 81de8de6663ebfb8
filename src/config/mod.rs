mod types;

pub use types::*;

use crate::cli::Cli;
use anyhow::{Context, Result};
use ffscript_common::paths::{exclude_pattern, extension_pattern};
use ffscript_common::{Error, FileMatcher};
use ffscript_script::ScriptDialect;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = ["./ffscript.toml", "~/.config/ffscript/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(FileConfig::default())
}

/// Merge command line flags over the config file and built-in defaults.
pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Config> {
    let root = match &cli.dir {
        Some(dir) => {
            reject_stray_flag_value(dir)?;
            dir.clone()
        }
        None => default_root()?,
    };
    let root = std::path::absolute(&root)
        .with_context(|| format!("Failed to resolve directory: {:?}", root))?;

    let mut config = Config::with_defaults(root)?;

    if let Some(ffmpeg) = non_empty(cli.ffmpeg.as_ref()) {
        config.ffmpeg = ffmpeg.to_string();
    } else if let Some(path) = &file.tools.ffmpeg_path {
        config.ffmpeg = path.display().to_string();
    }

    if let Some(command) = pick(cli.command.as_ref(), file.command.as_ref()) {
        config.command = command.to_string();
    }
    if let Some(out) = pick(cli.out.as_ref(), file.out.as_ref()) {
        config.output_extension = out.trim_start_matches('.').to_string();
    }
    if let Some(name) = pick(cli.script_name.as_ref(), file.script_name.as_ref()) {
        config.script_name = name.to_string();
    }

    config.matcher = build_matcher(
        pick(cli.extensions.as_ref(), file.extensions.as_ref()),
        pick(cli.exclude.as_ref(), file.exclude.as_ref()),
    )?;

    config.recursive = cli.recursive.or(file.recursive).unwrap_or(false);
    config.delete_source = cli.delete_source.or(file.delete_source).unwrap_or(false);

    // Invalid names never replace a valid choice made at a lower layer.
    for script_type in [file.script_type.as_ref(), cli.script_type.as_ref()]
        .into_iter()
        .flatten()
    {
        match script_type.parse::<ScriptDialect>() {
            Ok(dialect) => config.dialect = dialect,
            Err(e) => tracing::warn!("{}, keeping {}", e, config.dialect),
        }
    }

    config.dry_run = cli.dry_run;

    validate_config(&config)?;

    Ok(config)
}

fn build_matcher(extensions: Option<&str>, exclude: Option<&str>) -> Result<FileMatcher> {
    let supported = match extensions {
        Some(list) => extension_pattern(list)?,
        None => FileMatcher::videos()?.supported().clone(),
    };
    let exclude = exclude.map(exclude_pattern).transpose()?;

    Ok(FileMatcher::new(supported, exclude))
}

/// Validate configuration
fn validate_config(config: &Config) -> ffscript_common::Result<()> {
    if config.output_extension.is_empty() {
        return Err(Error::config("Output extension cannot be empty"));
    }

    if Path::new(&config.script_name).file_name() != Some(OsStr::new(&config.script_name)) {
        return Err(Error::config(format!(
            "Script name must be a plain file name: {:?}",
            config.script_name
        )));
    }

    Ok(())
}

/// A missing directory named `true` or `false` is almost always the value of
/// a boolean flag given as `--flag true` instead of `--flag=true`.
fn reject_stray_flag_value(dir: &Path) -> ffscript_common::Result<()> {
    let literal = dir.to_str().is_some_and(|s| s == "true" || s == "false");
    if literal && !dir.exists() {
        return Err(Error::config(format!(
            "Directory {:?} does not exist; boolean flags take a value only as --flag={}",
            dir,
            dir.display()
        )));
    }
    Ok(())
}

/// First value that is present and not an empty string; flags win over the file.
fn pick<'a>(flag: Option<&'a String>, file: Option<&'a String>) -> Option<&'a str> {
    non_empty(flag).or_else(|| non_empty(file))
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Directory used when none is given on the command line.
fn default_root() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read current directory")
}
