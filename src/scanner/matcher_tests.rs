use std::path::Path;

use super::*;

fn matcher(excludes: &[&str]) -> ChapterMatcher {
    let excludes: Vec<String> = excludes.iter().map(|s| (*s).to_string()).collect();
    ChapterMatcher::new(&["md".to_string()], &excludes).unwrap()
}

#[test]
fn chapters_selected_by_extension() {
    let matcher = matcher(&[]);

    assert!(matcher.should_include(Path::new("第1卷/第1章.md")));
    assert!(!matcher.should_include(Path::new("大綱.txt")));
    assert!(!matcher.should_include(Path::new("Makefile")));
}

#[test]
fn extension_ignores_case() {
    assert!(matcher(&[]).should_include(Path::new("第1章.MD")));
}

#[test]
fn several_extensions() {
    let matcher =
        ChapterMatcher::new(&["md".to_string(), "txt".to_string()], &[]).unwrap();

    assert!(matcher.should_include(Path::new("a.md")));
    assert!(matcher.should_include(Path::new("a.txt")));
    assert!(!matcher.should_include(Path::new("a.png")));
}

#[test]
fn excludes_match_root_relative_paths() {
    let matcher = matcher(&["草稿/**", "**/README.md"]);

    assert!(matcher.should_include(Path::new("第1卷/第1章.md")));
    assert!(!matcher.should_include(Path::new("草稿/廢稿.md")));
    assert!(!matcher.should_include(Path::new("第1卷/README.md")));
    // Anchored at the root: a nested 草稿 folder is not covered by `草稿/**`.
    assert!(matcher.should_include(Path::new("第1卷/草稿/廢稿.md")));
}

#[test]
fn double_star_prefix_also_matches_top_level() {
    let matcher = matcher(&["**/drafts/**"]);

    assert!(!matcher.should_include(Path::new("drafts/01.md")));
    assert!(!matcher.should_include(Path::new("第2卷/drafts/01.md")));
}

#[test]
fn from_config_uses_scanner_section() {
    let config = ScannerConfig {
        extensions: vec!["txt".to_string()],
        exclude: vec!["notes/**".to_string()],
    };
    let matcher = ChapterMatcher::from_config(&config).unwrap();

    assert!(matcher.should_include(Path::new("01.txt")));
    assert!(!matcher.should_include(Path::new("notes/01.txt")));
    assert!(!matcher.should_include(Path::new("01.md")));
}

#[test]
fn invalid_exclude_is_rejected() {
    let result = ChapterMatcher::new(&["md".to_string()], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(ChapterGuardError::InvalidPattern { pattern, .. }) if pattern == "[invalid"
    ));
}
