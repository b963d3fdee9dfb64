mod csv_report;
mod json;
mod progress;
mod text;

pub use csv_report::{write_csv, write_csv_report};
pub use json::{IssueJsonFormatter, StatsJsonFormatter};
pub use progress::ScanProgress;
pub use text::{IssueTextFormatter, StatsTextFormatter, format_fix_summary};

use crate::checker::StatsReport;
use crate::error::Result;
use crate::meta::MetaIssue;

/// Formats a chapter length report.
pub trait StatsFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &StatsReport) -> Result<String>;
}

/// Formats fourth-wall issues found by the detector.
pub trait IssueFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, issues: &[MetaIssue]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}
