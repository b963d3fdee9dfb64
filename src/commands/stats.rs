use rayon::prelude::*;

use crate::checker::{ChapterCount, ChapterFilter, StatsReport, ThresholdChecker};
use crate::cli::{Cli, StatsArgs};
use crate::counter::CharCounter;
use crate::output::{
    OutputFormat, ScanProgress, StatsFormatter, StatsJsonFormatter, StatsTextFormatter,
    write_csv_report,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{
    ChapterFile, collect_chapters, color_choice_to_mode, load_scan_config,
};

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the chapter length report, then write the CSV export if requested.
///
/// # Errors
/// Returns an error if configuration loading, scanning or formatting fails.
/// A failed CSV export is logged and does not fail the run.
pub fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> Result<()> {
    let report = build_report(args, cli)?;
    print!("{}", format_report(&report, args, cli)?);

    if let Some(csv_path) = &args.csv {
        match write_csv_report(csv_path, &report.chapters) {
            Ok(()) => log::info!(
                "Wrote {} row(s) to {}",
                report.chapters.len(),
                csv_path.display()
            ),
            Err(e) => log::error!("{}", e.message()),
        }
    }
    Ok(())
}

/// Render the report for the console.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_report(report: &StatsReport, args: &StatsArgs, cli: &Cli) -> Result<String> {
    match args.format {
        OutputFormat::Text => {
            let mode = color_choice_to_mode(cli.color);
            StatsTextFormatter::new(mode)
                .with_top(args.top)
                .format(report)
        }
        OutputFormat::Json => Ok(format!("{}\n", StatsJsonFormatter.format(report)?)),
    }
}

/// Scan, count and classify every chapter selected by `args`.
///
/// # Errors
/// Returns an error if configuration loading or scanning fails.
pub fn build_report(args: &StatsArgs, cli: &Cli) -> Result<StatsReport> {
    let config = load_scan_config(&args.scan, cli.no_config)?;
    let threshold = args.threshold.unwrap_or(config.content.threshold);
    let filter = ChapterFilter {
        below: args.below,
        from_volume: args.from_volume,
    };

    let chapters: Vec<ChapterFile> = collect_chapters(&config, &args.scan.paths)?
        .into_iter()
        .filter(|chapter| filter.keeps_path(&chapter.display_path))
        .collect();

    let checker = ThresholdChecker::new(threshold);
    let counted = count_chapters(&chapters, &checker, cli.quiet);
    let kept = counted
        .into_iter()
        .filter(|chapter| filter.keeps_count(chapter.count))
        .collect();

    Ok(StatsReport::new(kept, threshold))
}

/// Count in parallel; results come back in walk order. Unreadable files are
/// logged and left out.
fn count_chapters(
    chapters: &[ChapterFile],
    checker: &ThresholdChecker,
    quiet: bool,
) -> Vec<ChapterCount> {
    let counter = CharCounter::new();
    let progress = ScanProgress::new(chapters.len() as u64, "Counting", quiet);

    let counted = chapters
        .par_iter()
        .filter_map(|chapter| {
            let result = counter.count_file(&chapter.path);
            progress.inc();
            match result {
                Ok(count) => Some(checker.check(
                    &chapter.path,
                    chapter.display_path.clone(),
                    count,
                )),
                Err(e) => {
                    log::warn!("{}", e.message());
                    None
                }
            }
        })
        .collect();

    progress.finish();
    counted
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
