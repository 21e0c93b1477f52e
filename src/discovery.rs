// src/discovery.rs
use crate::config::{should_prune, SOURCE_EXT_PATTERN};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

static SOURCE_EXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SOURCE_EXT_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Enumerates all recognized source files under a project root, excluding
/// dependency-directory trees. Enumeration errors are tolerated per entry
/// and surfaced as a count; one unreadable directory never stops the walk.
#[must_use]
pub fn enumerate(root: &Path) -> (Vec<PathBuf>, usize) {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_source_file(entry.path()) {
                    paths.push(entry.path().to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn is_source_file(path: &Path) -> bool {
    let filename = path.file_name().map_or("", |f| f.to_str().unwrap_or(""));
    SOURCE_EXT_RE.is_match(filename)
}
