mod filter;
mod report;
mod threshold;

pub use filter::ChapterFilter;
pub use report::{ReportSummary, StatsReport};
pub use threshold::{ChapterCount, LengthStatus, ThresholdChecker};
