use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn stats_defaults() {
    let cli = Cli::try_parse_from(["chapter-guard", "stats"]).unwrap();
    let Commands::Stats(args) = cli.command else {
        panic!("expected stats");
    };
    assert_eq!(args.scan.paths, vec![PathBuf::from(".")]);
    assert!(args.threshold.is_none());
    assert!(args.csv.is_none());
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn stats_with_options() {
    let cli = Cli::try_parse_from([
        "chapter-guard",
        "stats",
        "章稿",
        "--threshold",
        "2500",
        "--below",
        "3000",
        "--from-volume",
        "9",
        "--top",
        "10",
        "--csv",
        "counts.csv",
        "--ext",
        "md,txt",
        "-x",
        "**/草稿/**",
        "-f",
        "json",
    ])
    .unwrap();
    let Commands::Stats(args) = cli.command else {
        panic!("expected stats");
    };
    assert_eq!(args.scan.paths, vec![PathBuf::from("章稿")]);
    assert_eq!(args.threshold, Some(2500));
    assert_eq!(args.below, Some(3000));
    assert_eq!(args.from_volume, Some(9));
    assert_eq!(args.top, Some(10));
    assert_eq!(args.csv, Some(PathBuf::from("counts.csv")));
    assert_eq!(
        args.scan.ext,
        Some(vec!["md".to_string(), "txt".to_string()])
    );
    assert_eq!(args.scan.exclude, vec!["**/草稿/**".to_string()]);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn check_strict_flag() {
    let cli = Cli::try_parse_from(["chapter-guard", "check", "--strict", "a", "b"]).unwrap();
    let Commands::Check(args) = cli.command else {
        panic!("expected check");
    };
    assert!(args.strict);
    assert_eq!(args.scan.paths.len(), 2);
}

#[test]
fn fix_dry_run_flag() {
    let cli = Cli::try_parse_from(["chapter-guard", "fix", "--dry-run"]).unwrap();
    let Commands::Fix(args) = cli.command else {
        panic!("expected fix");
    };
    assert!(args.dry_run);
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["chapter-guard", "check", "-vv", "--no-config", "--color", "never"])
        .unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(cli.no_config);
    assert!(matches!(cli.color, ColorChoice::Never));
}

#[test]
fn unknown_format_rejected() {
    assert!(Cli::try_parse_from(["chapter-guard", "check", "-f", "sarif"]).is_err());
}

#[test]
fn init_default_output() {
    let cli = Cli::try_parse_from(["chapter-guard", "init"]).unwrap();
    let Commands::Init(args) = cli.command else {
        panic!("expected init");
    };
    assert_eq!(args.output, PathBuf::from(".chapter-guard.toml"));
    assert!(!args.force);
}

#[test]
fn config_show_parses_format() {
    let cli = Cli::try_parse_from(["chapter-guard", "config", "show", "-f", "json"]).unwrap();
    let Commands::Config(args) = cli.command else {
        panic!("expected config");
    };
    assert!(matches!(
        args.action,
        ConfigAction::Show {
            config: None,
            format: OutputFormat::Json
        }
    ));
}
