use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{ChapterGuardError, Result};

use super::FileFilter;

/// Decides which files below a scan root are chapters.
///
/// Exclude globs see the path relative to the scan root, so `drafts/**` skips
/// the manuscript's top-level drafts folder while a manuscript that itself
/// lives somewhere under a `drafts` directory is still scanned.
pub struct ChapterMatcher {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl ChapterMatcher {
    /// # Errors
    /// Returns `InvalidPattern` for the first exclude glob that does not compile.
    pub fn new(extensions: &[String], excludes: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in excludes {
            let glob = Glob::new(pattern).map_err(|source| ChapterGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let excludes = builder
            .build()
            .map_err(|source| ChapterGuardError::InvalidPattern {
                pattern: excludes.join(", "),
                source,
            })?;

        Ok(Self {
            extensions: extensions.to_vec(),
            excludes,
        })
    }

    /// # Errors
    /// Returns `InvalidPattern` if an exclude glob does not compile.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        Self::new(&config.extensions, &config.exclude)
    }

    /// `第1章.MD` counts as a chapter when `md` is configured.
    fn is_chapter_file(&self, relative: &Path) -> bool {
        relative
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

impl FileFilter for ChapterMatcher {
    fn should_include(&self, relative: &Path) -> bool {
        self.is_chapter_file(relative) && !self.excludes.is_match(relative)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
