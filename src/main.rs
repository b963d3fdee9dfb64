use clap::Parser;

use chapter_guard::cli::{Cli, Commands};
use chapter_guard::commands::{run_check, run_config, run_fix, run_init, run_stats};
use chapter_guard::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Check(args) => run_check(args, &cli),
        Commands::Fix(args) => run_fix(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
