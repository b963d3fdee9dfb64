pub mod check;
pub mod config;
pub mod context;
pub mod fix;
pub mod init;
pub mod stats;

pub use check::{find_issues, run_check, run_check_impl};
pub use config::run_config;
pub use context::ChapterFile;
pub use fix::{run_fix, run_fix_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use stats::{build_report, format_report, run_stats, run_stats_impl};
