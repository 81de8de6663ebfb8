//! ffscript-common: shared error types and file matchers.
//!
//! - **Error Handling**: the common [`Error`] enum and [`Result`] alias
//! - **Path Matchers**: extension and exclude patterns for candidate files
//!
//! # Examples
//!
//! ```
//! use ffscript_common::paths::FileMatcher;
//! use std::path::Path;
//!
//! let matcher = FileMatcher::videos().unwrap();
//! assert!(matcher.is_supported_path(Path::new("movie.mkv")));
//! assert!(!matcher.is_excluded_path(Path::new("movie.mkv")));
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
pub use paths::FileMatcher;
