mod matcher;

pub use matcher::ChapterMatcher;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ChapterGuardError, Result};

/// Decides whether a discovered file is scanned.
pub trait FileFilter {
    /// `relative` is the path below the scan root. A root that is itself a
    /// file is passed as its file name.
    fn should_include(&self, relative: &Path) -> bool;
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the root itself cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive chapter discovery.
///
/// Entries are visited in file-name order within each directory, so results
/// are stable across platforms. Symlinked files and directories are followed
/// and reported under the link's own path; link cycles and dangling links are
/// logged and skipped. A missing root yields no files and a warning; an
/// unreadable root is an error; unreadable entries below it are skipped.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            log::warn!("Directory not found: {}", root.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(ChapterGuardError::DirectoryWalk {
                        path: root.to_path_buf(),
                        source: err,
                    });
                }
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if self.filter.should_include(relative_to_root(root, entry.path())) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scan_impl(root)
    }
}

/// Path below `root`. A root that is itself the file yields its file name.
pub(crate) fn relative_to_root<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .or_else(|| path.file_name().map(Path::new))
        .unwrap_or(path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
