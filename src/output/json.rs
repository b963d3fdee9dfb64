use serde::Serialize;

use crate::checker::StatsReport;
use crate::error::Result;
use crate::meta::MetaIssue;

use super::{IssueFormatter, StatsFormatter};

pub struct StatsJsonFormatter;

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

pub struct IssueJsonFormatter;

#[derive(Serialize)]
struct IssueOutput<'a> {
    total: usize,
    issues: &'a [MetaIssue],
}

impl IssueFormatter for IssueJsonFormatter {
    fn format(&self, issues: &[MetaIssue]) -> Result<String> {
        let output = IssueOutput {
            total: issues.len(),
            issues,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
