use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LengthStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "LOW")]
    Low,
}

impl LengthStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Low => "LOW",
        }
    }

    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl fmt::Display for LengthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character count of one chapter, classified against the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterCount {
    #[serde(skip)]
    pub path: PathBuf,
    /// Path relative to the scanned root, as shown in reports.
    #[serde(rename = "path")]
    pub display_path: String,
    pub count: usize,
    pub status: LengthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdChecker {
    threshold: usize,
}

impl ThresholdChecker {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub const fn classify(&self, count: usize) -> LengthStatus {
        if count >= self.threshold {
            LengthStatus::Ok
        } else {
            LengthStatus::Low
        }
    }

    #[must_use]
    pub fn check(&self, path: &Path, display_path: String, count: usize) -> ChapterCount {
        ChapterCount {
            path: path.to_path_buf(),
            display_path,
            count,
            status: self.classify(count),
        }
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
