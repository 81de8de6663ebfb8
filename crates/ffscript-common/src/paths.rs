//! Path matchers for deciding which files a script should cover.
//!
//! Files are selected by a case-insensitive extension suffix pattern and may
//! be dropped again by an optional, also case-insensitive, exclude pattern.
//! Both patterns are tested against the file's basename only.

use crate::{Error, Result};
use regex::Regex;
use std::path::Path;

/// Video extensions matched when no custom list is configured.
const VIDEO_EXTENSIONS: &[&str] = &[
    "webm", "mkv", "wmv", "flv", "m4v", "mov", "mpg", "mpeg", "ts", "avi", "rm", "mp4",
];

/// Compile a pipe separated extension list (`mkv|avi`) into a suffix pattern.
///
/// The list is spliced into `\.(<list>)$` as is, so alternations and other
/// regex syntax inside the list are honoured.
///
/// # Examples
///
/// ```
/// use ffscript_common::paths::extension_pattern;
///
/// let re = extension_pattern("mkv|avi").unwrap();
/// assert!(re.is_match("Movie.MKV"));
/// assert!(!re.is_match("movie.mp4"));
/// ```
pub fn extension_pattern(list: &str) -> Result<Regex> {
    let pattern = format!(r"(?i)\.({})$", list);
    Regex::new(&pattern).map_err(|e| Error::invalid_pattern(list, e))
}

/// Compile a user supplied exclude fragment into a case-insensitive pattern.
pub fn exclude_pattern(fragment: &str) -> Result<Regex> {
    let pattern = format!("(?i){}", fragment);
    Regex::new(&pattern).map_err(|e| Error::invalid_pattern(fragment, e))
}

/// Decides whether a file is a candidate for the generated script.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    supported: Regex,
    exclude: Option<Regex>,
}

impl FileMatcher {
    /// Create a matcher from a compiled extension pattern and optional exclude pattern.
    pub fn new(supported: Regex, exclude: Option<Regex>) -> Self {
        Self { supported, exclude }
    }

    /// Matcher over the default video extensions with no exclusions.
    pub fn videos() -> Result<Self> {
        Ok(Self::new(extension_pattern(&VIDEO_EXTENSIONS.join("|"))?, None))
    }

    /// The compiled extension suffix pattern.
    pub fn supported(&self) -> &Regex {
        &self.supported
    }

    /// The compiled exclude pattern, if any.
    pub fn exclude(&self) -> Option<&Regex> {
        self.exclude.as_ref()
    }

    /// Check whether a basename carries a supported extension.
    pub fn is_supported(&self, name: &str) -> bool {
        self.supported.is_match(name)
    }

    /// Check whether a basename is excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Check the basename of a path against the extension pattern.
    pub fn is_supported_path(&self, path: &Path) -> bool {
        file_name(path).is_some_and(|name| self.is_supported(&name))
    }

    /// Check the basename of a path against the exclude pattern.
    pub fn is_excluded_path(&self, path: &Path) -> bool {
        file_name(path).is_some_and(|name| self.is_excluded(&name))
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
