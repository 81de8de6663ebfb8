//! Directory scanner.
//!
//! Walks the scan root, either one level deep or recursively in depth-first
//! pre-order, and yields every file whose basename passes the
//! [`FileMatcher`]. Files are yielded lazily in directory-listing order.

use ffscript_common::{Error, FileMatcher, Result};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Scanner for discovering candidate video files.
pub struct DirectoryWalker<'a> {
    root: PathBuf,
    recursive: bool,
    matcher: &'a FileMatcher,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(root: impl Into<PathBuf>, recursive: bool, matcher: &'a FileMatcher) -> Self {
        Self {
            root: root.into(),
            recursive,
            matcher,
        }
    }

    /// Start walking.
    ///
    /// The root is checked up front: a missing, unreadable or non-directory
    /// root fails here. Unreadable entries further down are logged and
    /// skipped while iterating.
    pub fn walk(&self) -> Result<Candidates<'a>> {
        let root = std::path::absolute(&self.root)?;

        if !std::fs::metadata(&root)?.is_dir() {
            return Err(Error::not_a_directory(root));
        }
        // Surface permission errors before the first yield
        std::fs::read_dir(&root)?;

        info!("Scanning directory: {:?}", root);

        let mut walker = WalkDir::new(&root).follow_links(true).min_depth(1);
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        Ok(Candidates {
            entries: walker.into_iter(),
            matcher: self.matcher,
        })
    }
}

/// Lazy sequence of candidate files produced by [`DirectoryWalker::walk`].
pub struct Candidates<'a> {
    entries: walkdir::IntoIter,
    matcher: &'a FileMatcher,
}

impl Iterator for Candidates<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            // Skip directories
            if !entry.file_type().is_file() {
                continue;
            }

            if !self.matcher.is_supported_path(entry.path()) {
                continue;
            }

            if self.matcher.is_excluded_path(entry.path()) {
                info!("Excluding file: {:?}", entry.path());
                continue;
            }

            debug!("Found file: {:?}", entry.path());
            return Some(entry.into_path());
        }
    }
}
