use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::MetaConfig;
use crate::error::{ChapterGuardError, Result};

use super::{ForbiddenPatternSet, LineScope, RuleChain};

/// Result of running the rule chain over a whole chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedContent {
    pub content: String,
    /// 1-based numbers of the lines that were rewritten.
    pub changed_lines: Vec<usize>,
}

impl FixedContent {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.changed_lines.is_empty()
    }
}

/// Per-file outcome of a fix run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixOutcome {
    pub path: PathBuf,
    pub changed: bool,
    pub changed_lines: Vec<usize>,
}

/// Where chapter text is read from and written back to.
pub trait ChapterStore {
    /// # Errors
    /// Returns the underlying I/O error.
    fn read(&self, path: &Path) -> std::io::Result<String>;

    /// # Errors
    /// Returns the underlying I/O error.
    fn write(&self, path: &Path, content: &str) -> std::io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl ChapterStore for DiskStore {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        std::fs::write(path, content)
    }
}

pub struct MetaFixer {
    patterns: ForbiddenPatternSet,
    rules: RuleChain,
    scope: LineScope,
}

impl MetaFixer {
    #[must_use]
    pub const fn new(patterns: ForbiddenPatternSet, rules: RuleChain, scope: LineScope) -> Self {
        Self {
            patterns,
            rules,
            scope,
        }
    }

    /// Builds a fixer from the `[meta]` configuration section.
    ///
    /// # Errors
    /// Returns an error if a pattern or rule does not compile.
    pub fn from_config(config: &MetaConfig) -> Result<Self> {
        Ok(Self::new(
            ForbiddenPatternSet::new(&config.patterns)?,
            RuleChain::new(&config.rules)?,
            LineScope::from_config(config),
        ))
    }

    /// Rewrites every non-exempt line that contains a forbidden pattern.
    ///
    /// Lines are rejoined with `\n`; a trailing newline is kept.
    #[must_use]
    pub fn fix(&self, content: &str) -> FixedContent {
        let mut changed_lines = Vec::new();
        let lines: Vec<String> = content
            .lines()
            .enumerate()
            .map(|(index, line)| {
                if self.scope.is_exempt(index, line) || !self.patterns.is_match(line) {
                    return line.to_string();
                }
                let fixed = self.rules.apply(line);
                if fixed != line {
                    changed_lines.push(index + 1);
                }
                fixed
            })
            .collect();

        if changed_lines.is_empty() {
            return FixedContent {
                content: content.to_string(),
                changed_lines,
            };
        }

        let mut fixed = lines.join("\n");
        if content.ends_with('\n') {
            fixed.push('\n');
        }
        FixedContent {
            content: fixed,
            changed_lines,
        }
    }

    /// Fixes one file in place. The file is overwritten only when a line
    /// changed and `dry_run` is false.
    ///
    /// # Errors
    /// Returns `FileRead` or `FileWrite` on I/O failure.
    pub fn fix_file(&self, path: &Path, dry_run: bool) -> Result<FixOutcome> {
        self.fix_in(&DiskStore, path, dry_run)
    }

    /// [`MetaFixer::fix_file`] against any [`ChapterStore`].
    ///
    /// # Errors
    /// Returns `FileRead` or `FileWrite` on I/O failure.
    pub fn fix_in<S: ChapterStore>(
        &self,
        store: &S,
        path: &Path,
        dry_run: bool,
    ) -> Result<FixOutcome> {
        let content = store.read(path).map_err(|source| ChapterGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let fixed = self.fix(&content);
        let changed = fixed.is_changed();
        if changed && !dry_run {
            store.write(path, &fixed.content).map_err(|source| {
                ChapterGuardError::FileWrite {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            log::info!(
                "Rewrote {} ({} lines)",
                path.display(),
                fixed.changed_lines.len()
            );
        }

        Ok(FixOutcome {
            path: path.to_path_buf(),
            changed,
            changed_lines: fixed.changed_lines,
        })
    }
}

#[cfg(test)]
#[path = "fixer_tests.rs"]
mod tests;
