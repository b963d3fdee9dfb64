use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["chapter-guard"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn validate_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = run_config_validate_impl(&tmp.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn validate_accepts_partial_config() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("guard.toml");
    fs::write(&path, "[content]\nthreshold = 2500\n").unwrap();

    run_config_validate_impl(&path).unwrap();
    assert_eq!(run_config_validate(&path), EXIT_SUCCESS);
}

#[test]
fn validate_rejects_bad_toml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("guard.toml");
    fs::write(&path, "[content\nthreshold = ").unwrap();

    assert!(matches!(
        run_config_validate_impl(&path),
        Err(ChapterGuardError::TomlParse(_))
    ));
}

#[test]
fn validate_rejects_bad_rule_regex() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("guard.toml");
    fs::write(&path, "[[meta.rules]]\npattern = \"[\"\nreplacement = \"\"\n").unwrap();

    assert!(matches!(
        run_config_validate_impl(&path),
        Err(ChapterGuardError::InvalidRegex { .. })
    ));
    assert_eq!(run_config_validate(&path), EXIT_CONFIG_ERROR);
}

#[test]
fn show_text_round_trips() {
    let output = run_config_show_impl(None, OutputFormat::Text, &cli(&["--no-config", "config", "show"]))
        .unwrap();
    assert!(output.starts_with("# === Effective Configuration ==="));

    let parsed: Config = toml::from_str(&output).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn show_json_reflects_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("guard.toml");
    fs::write(&path, "[scanner]\nextensions = [\"md\", \"txt\"]\n").unwrap();

    let output = run_config_show_impl(
        Some(&path),
        OutputFormat::Json,
        &cli(&["config", "show"]),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["scanner"]["extensions"][1], "txt");
    assert_eq!(json["content"]["threshold"], 3000);
}
