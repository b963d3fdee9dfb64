use std::path::PathBuf;

use crate::cli::{Cli, FixArgs};
use crate::meta::{ChapterStore, DiskStore, FixOutcome, MetaFixer};
use crate::output::format_fix_summary;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{ChapterFile, collect_chapters, load_scan_config};

#[must_use]
pub fn run_fix(args: &FixArgs, cli: &Cli) -> i32 {
    match run_fix_impl(args, cli) {
        Ok(outcomes) => {
            print!("{}", format_fix_summary(&outcomes, args.dry_run, cli.verbose));
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Fix chapters one at a time, each file read, rewritten and closed before the next.
///
/// Files that cannot be read or written are logged and left out of the outcomes.
///
/// # Errors
/// Returns an error if configuration loading or scanning fails.
pub fn run_fix_impl(args: &FixArgs, cli: &Cli) -> Result<Vec<FixOutcome>> {
    let config = load_scan_config(&args.scan, cli.no_config)?;
    let fixer = MetaFixer::from_config(&config.meta)?;
    let chapters = collect_chapters(&config, &args.scan.paths)?;

    Ok(fix_chapters(&fixer, &DiskStore, &chapters, args.dry_run))
}

/// Outcomes in walk order, reported under each chapter's display path.
pub(crate) fn fix_chapters<S: ChapterStore>(
    fixer: &MetaFixer,
    store: &S,
    chapters: &[ChapterFile],
    dry_run: bool,
) -> Vec<FixOutcome> {
    let mut outcomes = Vec::with_capacity(chapters.len());
    for chapter in chapters {
        match fixer.fix_in(store, &chapter.path, dry_run) {
            Ok(outcome) => outcomes.push(FixOutcome {
                path: PathBuf::from(&chapter.display_path),
                ..outcome
            }),
            Err(e) => log::error!("{}", e.message()),
        }
    }
    outcomes
}

#[cfg(test)]
#[path = "fix_tests.rs"]
mod tests;
