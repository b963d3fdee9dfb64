//! Integration tests for the `init` and `config` commands.

mod common;

use common::{SMALL_THRESHOLD_CONFIG, TestFixture};
use predicates::prelude::*;

#[test]
fn init_creates_default_config() {
    let fixture = TestFixture::new();

    chapter_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".chapter-guard.toml");
    assert!(content.contains("[[meta.rules]]"));
}

#[test]
fn init_refuses_existing_file_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");

    chapter_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fixture.read(".chapter-guard.toml"), "# existing\n");

    chapter_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn init_then_validate() {
    let fixture = TestFixture::new();

    chapter_guard!()
        .current_dir(fixture.path())
        .args(["init", "-o", "guard.toml"])
        .assert()
        .success();

    chapter_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "-c", "guard.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn validate_reports_semantic_errors() {
    let fixture = TestFixture::new();
    fixture.create_config("[meta]\nquote_marker = \"\"\n");

    chapter_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("quote_marker"));
}

#[test]
fn validate_missing_file() {
    let fixture = TestFixture::new();

    chapter_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn show_reports_effective_values() {
    let fixture = TestFixture::new();
    fixture.create_config(SMALL_THRESHOLD_CONFIG);

    chapter_guard!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold = 100"))
        .stdout(predicate::str::contains("**/drafts/**"))
        .stdout(predicate::str::contains("[[meta.patterns]]"));
}

#[test]
fn show_json_with_no_config_uses_defaults() {
    let fixture = TestFixture::new();
    fixture.create_config(SMALL_THRESHOLD_CONFIG);

    let assert = chapter_guard!()
        .current_dir(fixture.path())
        .args(["config", "show", "--no-config", "-f", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["content"]["threshold"], 3000);
    assert_eq!(json["meta"]["skip_leading_lines"], 2);
    assert_eq!(json["meta"]["rules"].as_array().unwrap().len(), 8);
}
