use serde::Serialize;

use super::ChapterCount;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub average: f64,
    pub low: usize,
    pub threshold: usize,
}

/// Chapter counts sorted ascending by count, plus summary figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub summary: ReportSummary,
    pub chapters: Vec<ChapterCount>,
}

impl StatsReport {
    /// Sorts `chapters` by count. The sort is stable: equal counts keep scan order.
    #[must_use]
    pub fn new(mut chapters: Vec<ChapterCount>, threshold: usize) -> Self {
        chapters.sort_by_key(|c| c.count);

        let total = chapters.len();
        let sum: usize = chapters.iter().map(|c| c.count).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = if total == 0 {
            0.0
        } else {
            sum as f64 / total as f64
        };
        let low = chapters.iter().filter(|c| c.status.is_low()).count();

        Self {
            summary: ReportSummary {
                total,
                average,
                low,
                threshold,
            },
            chapters,
        }
    }
}
