//! File discovery and suffix filtering

use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Set of file name suffixes that qualify a file for formatting.
///
/// Matching is a plain "name ends with" test on the raw file name, so `.c`
/// matches `thread.c` but not `thread.cc`, and a suffix without a dot such as
/// `akefile` would match `Makefile`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Whether `file_name` ends with any configured suffix.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.as_encoded_bytes();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
    }

    /// Like [`matches`](Self::matches), applied to the last component of `path`.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.matches(name))
    }
}

/// Traversal failed somewhere below a readable root.
#[derive(Debug, thiserror::Error)]
#[error("Failed to walk {root}: {source}")]
pub struct WalkError {
    pub root: String,
    #[source]
    pub source: ignore::Error,
}

/// Whether `root` can be walked at all.
///
/// Missing or unreadable roots are treated as empty rather than as errors.
fn is_walkable_root(root: &Path) -> bool {
    match fs::read_dir(root) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("Skipping root {}: {e}", root.display());
            false
        }
    }
}

/// Whether a walk entry is a regular file, or a symlink that resolves to one.
fn is_regular_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

/// Recursively collect every file under `root` whose name matches `filter`.
///
/// Files are returned in discovery order: depth-first, entries sorted by file
/// name. Hidden files and files listed in ignore files are still candidates,
/// and directory symlinks are not followed.
pub fn find_source_files(root: &Path, filter: &ExtensionFilter) -> Result<Vec<PathBuf>, WalkError> {
    if !is_walkable_root(root) {
        return Ok(Vec::new());
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| WalkError {
            root: root.display().to_string(),
            source,
        })?;

        if is_regular_file(&entry) && filter.matches(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    log::debug!("Found {} matching files under {}", files.len(), root.display());
    Ok(files)
}
