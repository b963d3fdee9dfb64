//! Fourth-wall reference detection and fixing.
//!
//! A fourth-wall reference is prose that leaks the book's structure (chapter or
//! volume numbers, "this chapter", "next chapter") into the story. The detector
//! lists them; the fixer rewrites them through an ordered [`RuleChain`].

mod detector;
mod fixer;
mod pattern;
mod rules;

pub use detector::{MetaDetector, MetaIssue};
pub use fixer::{ChapterStore, DiskStore, FixOutcome, FixedContent, MetaFixer};
pub use pattern::{ForbiddenPatternSet, Matches};
pub use rules::RuleChain;

use crate::config::MetaConfig;

/// Which lines of a chapter are open to meta checks.
///
/// Leading lines (title and the blank line after it) and block-quoted lines
/// are exempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScope {
    skip_leading_lines: usize,
    quote_marker: String,
}

impl LineScope {
    #[must_use]
    pub fn new(skip_leading_lines: usize, quote_marker: impl Into<String>) -> Self {
        Self {
            skip_leading_lines,
            quote_marker: quote_marker.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &MetaConfig) -> Self {
        Self::new(config.skip_leading_lines, config.quote_marker.as_str())
    }

    /// `index` is 0-based.
    #[must_use]
    pub fn is_exempt(&self, index: usize, line: &str) -> bool {
        index < self.skip_leading_lines || line.trim_start().starts_with(&self.quote_marker)
    }
}
