//! Turns a resolved [`Config`] into a generated script.

use crate::command::CommandBuilder;
use crate::config::Config;
use crate::scanner::DirectoryWalker;
use ffscript_common::{Error, Result};
use ffscript_script::ScriptBuilder;
use std::path::PathBuf;

/// Result of a planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// The script was written to `path`.
    Written { path: PathBuf, files: usize },
    /// Dry run: the script as it would have been written to `path`.
    Preview {
        path: PathBuf,
        files: usize,
        content: String,
    },
}

impl PlanOutcome {
    /// Number of source files the script covers.
    pub fn files(&self) -> usize {
        match self {
            PlanOutcome::Written { files, .. } | PlanOutcome::Preview { files, .. } => *files,
        }
    }
}

/// Plans one script for a configuration
pub struct ScriptPlanner<'a> {
    config: &'a Config,
}

impl<'a> ScriptPlanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Walk the root, queue a command per file and write the script.
    ///
    /// Fails with [`Error::NoFiles`] before anything is written when no
    /// candidate file was found.
    pub fn run(&self) -> Result<PlanOutcome> {
        self.log_settings();

        let config = self.config;
        let walker = DirectoryWalker::new(&config.root, config.recursive, &config.matcher);
        let mut commands = CommandBuilder::from_config(config);
        let mut script = ScriptBuilder::new(config.dialect);
        let mut files = 0;

        for path in walker.walk()? {
            let command = commands.build(&path);
            tracing::debug!("Queued: {}", command);
            script.add_command(&command)?;
            files += 1;

            if config.delete_source {
                script.delete_file(&path.display().to_string())?;
            }
        }

        if files == 0 {
            return Err(Error::NoFiles);
        }

        tracing::info!("Done, processed \"{}\" file(s).", files);

        let base = config.script_base();
        if config.dry_run {
            let content = script.render(&base);
            let path = script.script_path(&base);
            tracing::info!("[DRY RUN] Would write script: {:?}", path);
            return Ok(PlanOutcome::Preview {
                path,
                files,
                content,
            });
        }

        let path = script.finalize(&base)?;
        tracing::info!("Wrote script: {:?}", path);

        Ok(PlanOutcome::Written { path, files })
    }

    fn log_settings(&self) {
        let config = self.config;

        if config.delete_source {
            tracing::warn!("Deleting source files.");
        }
        tracing::info!("Running command: \"{}\"", config.command);
        tracing::info!("Output extension is: \"{}\"", config.output_extension);
        if config.recursive {
            tracing::info!("Recursive mode.");
        }
        if let Some(exclude) = config.matcher.exclude() {
            tracing::debug!("Excluding files matching: {}", exclude);
        }
        tracing::info!("Output set to {}", config.dialect);
    }
}

/// Convenience wrapper around [`ScriptPlanner::run`].
pub fn generate_script(config: &Config) -> Result<PlanOutcome> {
    ScriptPlanner::new(config).run()
}
