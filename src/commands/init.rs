use std::fs;

use crate::{ChapterGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChapterGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template).map_err(|source| ChapterGuardError::FileWrite {
        path: output_path.clone(),
        source,
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# chapter-guard configuration file

[scanner]
# Chapter file extensions, without the leading dot
extensions = ["md"]

# Glob patterns to skip (matched against the full path)
exclude = [
    # "**/草稿/**",
]

[content]
# Chapters with fewer non-whitespace characters are reported as LOW
threshold = 3000

[meta]
# Leading lines of each chapter (title and blank line) that are never checked
skip_leading_lines = 2

# Lines starting with this marker are in-story system messages and never checked
quote_marker = ">"

# Fourth-wall patterns, matched case-insensitively in this order.
# `not_after` rejects a match when the text right before it matches the guard.
[[meta.patterns]]
pattern = '第[一二三四五六七八九十0-9]+[卷章]'
not_after = '# '

[[meta.patterns]]
pattern = 'Ch ?[0-9]+'
not_after = '\w'

[[meta.patterns]]
pattern = 'Chapter ?[0-9]+'

[[meta.patterns]]
pattern = '卷末'

[[meta.patterns]]
pattern = '本章'

[[meta.patterns]]
pattern = '下一章'

# Rewrites applied by `fix`, in this order, to every flagged line.
# `$1`-style group references in the replacement are expanded.
[[meta.rules]]
pattern = '[\(（].*?([卷章]完).*?[\)）]'
replacement = ''

[[meta.rules]]
pattern = '第[一二三四五六七八九十0-9]+卷，完。'
replacement = ''

[[meta.rules]]
pattern = '在第[一二三四五六七八九十0-9]+卷中'
replacement = '在之前的行動中'

[[meta.rules]]
pattern = '第一卷的時候'
replacement = '當初最早的時候'

[[meta.rules]]
pattern = 'Ch ?[0-9]+ ?那次'
replacement = '之前那次事件'
ignore_case = true

[[meta.rules]]
pattern = '在 ?Ch ?104 ?中'
replacement = '在之前的測試中'
ignore_case = true

# Catch-all: also rewrites numbered chapters that are not fourth-wall references
[[meta.rules]]
pattern = '第[0-9]+章'
replacement = '前段時間'

[[meta.rules]]
pattern = '本章'
replacement = '此段'
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
