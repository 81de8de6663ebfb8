//! ffmpeg command line construction.

pub mod output;

pub use output::{resolve_output_path, resolve_output_path_with, OutputAllocator};

use crate::config::Config;
use regex::Regex;
use std::path::Path;

/// Builds one ffmpeg command line per input file.
///
/// Output paths come from an [`OutputAllocator`], so no two inputs built by
/// the same builder are given the same output.
///
/// ```
/// use ffscript::command::CommandBuilder;
/// use ffscript_common::FileMatcher;
/// use std::path::Path;
///
/// let source = FileMatcher::videos().unwrap().supported().clone();
/// let mut builder = CommandBuilder::new("ffmpeg", "-codec copy", "mp4", source);
///
/// assert_eq!(
///     builder.build(Path::new("/media/movie.mkv")),
///     r#"ffmpeg -hide_banner -i "/media/movie.mkv" -codec copy "/media/movie.mp4""#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    binary: String,
    arguments: String,
    outputs: OutputAllocator,
}

impl CommandBuilder {
    pub fn new(
        binary: impl Into<String>,
        arguments: impl Into<String>,
        output_extension: impl Into<String>,
        source: Regex,
    ) -> Self {
        Self {
            binary: binary.into(),
            arguments: arguments.into(),
            outputs: OutputAllocator::new(output_extension, source),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.ffmpeg.as_str(),
            config.command.as_str(),
            config.output_extension.as_str(),
            config.matcher.supported().clone(),
        )
    }

    /// Render the command line for `input`.
    ///
    /// Paths are wrapped in double quotes verbatim. The configured arguments
    /// are inserted as given, unparsed.
    pub fn build(&mut self, input: &Path) -> String {
        let output = self.outputs.allocate(input);

        format!(
            "{} -hide_banner -i \"{}\" {} \"{}\"",
            self.binary,
            input.display(),
            self.arguments,
            output.display()
        )
    }
}
