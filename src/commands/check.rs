use std::path::PathBuf;

use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::meta::{MetaDetector, MetaIssue};
use crate::output::{IssueFormatter, IssueJsonFormatter, IssueTextFormatter, OutputFormat, ScanProgress};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS, Result};

use super::context::{ChapterFile, collect_chapters, color_choice_to_mode, load_scan_config};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// List fourth-wall references. Exits with `EXIT_ISSUES_FOUND` only under `--strict`.
///
/// # Errors
/// Returns an error if configuration loading, scanning or formatting fails.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let issues = find_issues(args, cli)?;

    let output = match args.format {
        OutputFormat::Text => {
            IssueTextFormatter::new(color_choice_to_mode(cli.color)).format(&issues)?
        }
        OutputFormat::Json => format!("{}\n", IssueJsonFormatter.format(&issues)?),
    };
    print!("{output}");

    if args.strict && !issues.is_empty() {
        Ok(EXIT_ISSUES_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Issues across all chapters, in walk order then line order.
///
/// # Errors
/// Returns an error if configuration loading or scanning fails.
pub fn find_issues(args: &CheckArgs, cli: &Cli) -> Result<Vec<MetaIssue>> {
    let config = load_scan_config(&args.scan, cli.no_config)?;
    let detector = MetaDetector::from_config(&config.meta)?;
    let chapters = collect_chapters(&config, &args.scan.paths)?;

    let progress = ScanProgress::new(chapters.len() as u64, "Checking", cli.quiet);
    let per_file: Vec<Vec<MetaIssue>> = chapters
        .par_iter()
        .map(|chapter| {
            let issues = detect_chapter(&detector, chapter);
            progress.inc();
            issues
        })
        .collect();
    progress.finish();

    Ok(per_file.into_iter().flatten().collect())
}

fn detect_chapter(detector: &MetaDetector, chapter: &ChapterFile) -> Vec<MetaIssue> {
    match detector.detect_file(&chapter.path) {
        Ok(issues) => issues
            .into_iter()
            .map(|issue| MetaIssue {
                path: PathBuf::from(&chapter.display_path),
                ..issue
            })
            .collect(),
        Err(e) => {
            log::warn!("{}", e.message());
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
