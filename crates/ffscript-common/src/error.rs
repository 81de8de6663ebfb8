//! Common error types used throughout ffscript.
//!
//! Covers the failure cases of a planning run: unreadable directories,
//! empty discoveries, bad patterns and misuse of a finalized script builder.

use std::path::PathBuf;

/// Common error type for ffscript.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan root exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// No candidate files were discovered.
    #[error("No video files to process")]
    NoFiles,

    /// A script builder was used after it was finalized.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A user supplied pattern failed to compile.
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Invalid configuration was provided.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new NotADirectory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a new InvalidState error.
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create a new InvalidPattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoFiles;
        assert_eq!(err.to_string(), "No video files to process");

        let err = Error::invalid_state("script already finalized");
        assert_eq!(err.to_string(), "Invalid state: script already finalized");

        let err = Error::not_a_directory("/tmp/movie.mkv");
        assert_eq!(err.to_string(), "Not a directory: /tmp/movie.mkv");

        let err = Error::config("bad value");
        assert_eq!(err.to_string(), "Config error: bad value");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::invalid_pattern("(", source);
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(err.to_string().starts_with("Invalid pattern \"(\""));
        assert!(std::error::Error::source(&err).is_some());
    }
}
