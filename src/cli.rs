use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "chapter-guard")]
#[command(
    author,
    version,
    about = "Chapter length and fourth-wall reference checks for a novel manuscript"
)]
#[command(long_about = "Counts characters per Markdown chapter, flags chapters below a \
    length threshold, and finds or fixes fourth-wall references such as in-text \
    chapter and volume numbers.\n\n\
    Exit codes:\n  \
    0 - Completed\n  \
    1 - Fourth-wall references found (check --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count characters per chapter and flag short chapters
    Stats(StatsArgs),

    /// List fourth-wall references without changing files
    Check(CheckArgs),

    /// Rewrite fourth-wall references in place
    Fix(FixArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by every command that walks the manuscript.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Chapter directories or files
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chapter file extensions (comma-separated, e.g., md,txt)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Minimum characters for a chapter to be OK (overrides config)
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Only report chapters with fewer characters than this
    #[arg(long)]
    pub below: Option<usize>,

    /// Skip chapters in volumes (第N卷) numbered lower than this
    #[arg(long)]
    pub from_volume: Option<u32>,

    /// Show only the N shortest chapters in the table
    #[arg(long)]
    pub top: Option<usize>,

    /// Also export the report as CSV (UTF-8 with BOM)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 1 when references are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct FixArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".chapter-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and patterns
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".chapter-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
