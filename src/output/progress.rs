use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} chapters";

/// Progress bar on stderr while chapters are read.
///
/// Hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, label: &'static str, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, label, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, label: &'static str, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total, label)
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn create_visible_progress_bar(total: u64, label: &'static str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        // The template is a constant; fall back to the default bar if indicatif rejects it.
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb.set_message(label);
        pb
    }

    /// Thread-safe for use with rayon parallel iterators.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
