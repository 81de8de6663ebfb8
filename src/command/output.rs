//! Output path resolution.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Compute the output path for `input`.
///
/// The matched source extension is stripped and `output_extension` appended.
/// When the input already carries the output extension, `_(1)`, `_(2)`, ...
/// is appended to the stem until a path that does not exist is found, so the
/// source is never named as its own output. With differing extensions the
/// plain candidate is returned even if it exists.
pub fn resolve_output_path(input: &Path, output_extension: &str, source: &Regex) -> PathBuf {
    resolve_output_path_with(input, output_extension, source, |p| p.exists())
}

/// [`resolve_output_path`] with a custom existence probe.
pub fn resolve_output_path_with<F>(
    input: &Path,
    output_extension: &str,
    source: &Regex,
    exists: F,
) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let input = input.to_string_lossy();
    let stem = source.replace(&input, "");

    if !has_extension(&input, output_extension) {
        return PathBuf::from(format!("{}.{}", stem, output_extension));
    }

    first_free(&stem, output_extension, exists)
}

/// Hands out output paths for one run, never the same path to two inputs.
///
/// Resolution follows [`resolve_output_path`], except that paths already
/// assigned earlier in the run count as taken. `movie.mp4` and `movie.MP4`
/// therefore get `movie_(1).mp4` and `movie_(2).mp4`, and `movie.mkv`
/// followed by `movie.avi` get `movie.mp4` and `movie_(1).mp4`. Asking again
/// for an input that was already resolved returns its earlier path.
#[derive(Debug, Clone)]
pub struct OutputAllocator {
    output_extension: String,
    source: Regex,
    resolved: HashMap<PathBuf, PathBuf>,
    assigned: HashSet<PathBuf>,
}

impl OutputAllocator {
    pub fn new(output_extension: impl Into<String>, source: Regex) -> Self {
        Self {
            output_extension: output_extension.into(),
            source,
            resolved: HashMap::new(),
            assigned: HashSet::new(),
        }
    }

    /// Output path for `input`, unique within this allocator.
    pub fn allocate(&mut self, input: &Path) -> PathBuf {
        if let Some(output) = self.resolved.get(input) {
            return output.clone();
        }

        let assigned = &self.assigned;
        let taken = |p: &Path| p.exists() || assigned.contains(p);

        let mut output =
            resolve_output_path_with(input, &self.output_extension, &self.source, taken);
        if assigned.contains(&output) {
            let input = input.to_string_lossy();
            let stem = self.source.replace(&input, "");
            output = first_free(&stem, &self.output_extension, taken);
        }

        self.assigned.insert(output.clone());
        self.resolved.insert(input.to_path_buf(), output.clone());
        output
    }
}

/// First `stem_(n).extension` for which `exists` is false, counting from 1.
fn first_free<F>(stem: &str, extension: &str, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let mut n: u64 = 1;
    loop {
        let candidate = PathBuf::from(format!("{}_({}).{}", stem, n, extension));
        if !exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Case-insensitive check for a `.{extension}` suffix.
fn has_extension(path: &str, extension: &str) -> bool {
    let suffix = format!(".{}", extension).to_lowercase();
    path.to_lowercase().ends_with(&suffix)
}
