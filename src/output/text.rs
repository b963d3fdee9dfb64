use std::fmt::Write;

use crate::checker::{LengthStatus, StatsReport};
use crate::error::Result;
use crate::meta::{FixOutcome, MetaIssue};

use super::{ColorMode, IssueFormatter, StatsFormatter, ansi};

const SEPARATOR: &str = "--------------------";
const COUNT_WIDTH: usize = 8;
const STATUS_WIDTH: usize = 6;

/// Fixed-width chapter table, shortest first.
pub struct StatsTextFormatter {
    use_colors: bool,
    top: Option<usize>,
}

impl StatsTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
            top: None,
        }
    }

    /// Limit the table to the `top` shortest chapters. The summary still
    /// covers every chapter.
    #[must_use]
    pub const fn with_top(mut self, top: Option<usize>) -> Self {
        self.top = top;
        self
    }

    fn colorize_status(&self, status: LengthStatus) -> String {
        let padded = format!("{:<STATUS_WIDTH$}", status.as_str());
        if !self.use_colors {
            return padded;
        }
        let color = match status {
            LengthStatus::Ok => ansi::GREEN,
            LengthStatus::Low => ansi::RED,
        };
        format!("{color}{padded}{}", ansi::RESET)
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        writeln!(output, "Chapters: {}", summary.total).ok();
        writeln!(output, "Average: {:.0}", summary.average).ok();
        writeln!(output, "Below {}: {}", summary.threshold, summary.low).ok();

        if report.chapters.is_empty() {
            return Ok(output);
        }

        let shown = self.top.unwrap_or(report.chapters.len());
        writeln!(output).ok();
        if shown < report.chapters.len() {
            writeln!(output, "Shortest {shown} chapters:").ok();
        }
        writeln!(
            output,
            "{:>COUNT_WIDTH$} | {:<STATUS_WIDTH$} | Chapter",
            "Count", "Status"
        )
        .ok();
        writeln!(output, "{}", "-".repeat(COUNT_WIDTH + STATUS_WIDTH + 40)).ok();

        for chapter in report.chapters.iter().take(shown) {
            writeln!(
                output,
                "{:>COUNT_WIDTH$} | {} | {}",
                chapter.count,
                self.colorize_status(chapter.status),
                chapter.display_path
            )
            .ok();
        }

        Ok(output)
    }
}

/// Issue listing in discovery order.
pub struct IssueTextFormatter {
    use_colors: bool,
}

impl IssueTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    fn highlight(&self, text: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{}{text}{}", ansi::YELLOW, ansi::RESET)
    }
}

impl IssueFormatter for IssueTextFormatter {
    fn format(&self, issues: &[MetaIssue]) -> Result<String> {
        let mut output = String::new();

        if issues.is_empty() {
            writeln!(output, "SUCCESS: no fourth-wall references found.").ok();
            return Ok(output);
        }

        writeln!(
            output,
            "FOUND: {} fourth-wall reference(s) to rework:",
            issues.len()
        )
        .ok();
        writeln!(output, "{SEPARATOR}").ok();
        for issue in issues {
            let matches: Vec<String> = issue.matches.iter().map(|m| self.highlight(m)).collect();
            writeln!(output, "File: {}", issue.path.display()).ok();
            writeln!(output, "Line: {}", issue.line_number).ok();
            writeln!(output, "Content: {}", issue.content).ok();
            writeln!(output, "Matches: {}", matches.join(", ")).ok();
            writeln!(output, "{SEPARATOR}").ok();
        }

        Ok(output)
    }
}

/// Summary of a fix run. `verbose` adds the rewritten line numbers.
#[must_use]
pub fn format_fix_summary(outcomes: &[FixOutcome], dry_run: bool, verbose: u8) -> String {
    let mut output = String::new();
    let changed: Vec<&FixOutcome> = outcomes.iter().filter(|o| o.changed).collect();

    if changed.is_empty() {
        writeln!(output, "SUCCESS: no files need fixing.").ok();
        return output;
    }

    if dry_run {
        writeln!(output, "DRY RUN: {} file(s) would be fixed.", changed.len()).ok();
    } else {
        writeln!(output, "COMPLETE: fixed {} file(s).", changed.len()).ok();
    }
    for outcome in changed {
        if verbose >= 1 {
            let lines: Vec<String> = outcome
                .changed_lines
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(
                output,
                "- {} (lines {})",
                outcome.path.display(),
                lines.join(", ")
            )
            .ok();
        } else {
            writeln!(output, "- {}", outcome.path.display()).ok();
        }
    }

    output
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
