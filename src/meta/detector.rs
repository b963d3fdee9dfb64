use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::Serialize;

use crate::config::MetaConfig;
use crate::error::{ChapterGuardError, Result};

use super::{ForbiddenPatternSet, LineScope};

/// One offending line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaIssue {
    pub path: PathBuf,
    /// 1-based.
    pub line_number: usize,
    /// Line content with surrounding whitespace trimmed.
    pub content: String,
    /// Distinct matched substrings, in order of first appearance.
    pub matches: Vec<String>,
}

pub struct MetaDetector {
    patterns: ForbiddenPatternSet,
    scope: LineScope,
}

impl MetaDetector {
    #[must_use]
    pub const fn new(patterns: ForbiddenPatternSet, scope: LineScope) -> Self {
        Self { patterns, scope }
    }

    /// Builds a detector from the `[meta]` configuration section.
    ///
    /// # Errors
    /// Returns an error if a pattern does not compile.
    pub fn from_config(config: &MetaConfig) -> Result<Self> {
        Ok(Self::new(
            ForbiddenPatternSet::new(&config.patterns)?,
            LineScope::from_config(config),
        ))
    }

    /// Scans chapter text. `path` is only recorded in the issues.
    #[must_use]
    pub fn detect(&self, path: &Path, content: &str) -> Vec<MetaIssue> {
        content
            .lines()
            .enumerate()
            .filter(|(index, line)| !self.scope.is_exempt(*index, line))
            .filter_map(|(index, line)| {
                let matches: IndexSet<&str> = self.patterns.find_iter(line).collect();
                if matches.is_empty() {
                    return None;
                }
                Some(MetaIssue {
                    path: path.to_path_buf(),
                    line_number: index + 1,
                    content: line.trim().to_string(),
                    matches: matches.into_iter().map(str::to_string).collect(),
                })
            })
            .collect()
    }

    /// Reads and scans one file.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read as UTF-8 text.
    pub fn detect_file(&self, path: &Path) -> Result<Vec<MetaIssue>> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ChapterGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.detect(path, &content))
    }
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
