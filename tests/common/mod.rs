#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the chapter-guard binary.
#[macro_export]
macro_rules! chapter_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("chapter-guard"))
    };
}

/// A temporary manuscript tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file(relative_path)).expect("Failed to read file")
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".chapter-guard.toml", content);
    }

    /// Creates a chapter with exactly `count` non-whitespace characters.
    pub fn create_chapter(&self, relative_path: &str, count: usize) {
        let content = format!("{}\n", "字".repeat(count));
        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small manuscript with fourth-wall references on some lines.
pub const CHAPTER_WITH_REFERENCES: &str = "# 第12章 回歸\n\
\n\
在第3卷中我們學到了很多。\n\
> 系統提示：本章任務完成\n\
就像 Ch 5 那次一樣。\n\
（本章完）\n";

pub const CLEAN_CHAPTER: &str = "# 第13章 新的開始\n\n陽光灑在城牆上。\n";

/// Config with a lower threshold and an excluded drafts directory.
pub const SMALL_THRESHOLD_CONFIG: &str = r#"
[scanner]
extensions = ["md"]
exclude = ["**/drafts/**"]

[content]
threshold = 100
"#;
