use serde::{Deserialize, Serialize};

/// Default minimum character count for a chapter.
pub const DEFAULT_THRESHOLD: usize = 3000;

/// Leading lines of every chapter (title and blank line) exempt from meta checks.
pub const DEFAULT_SKIP_LEADING_LINES: usize = 2;

/// Markdown block quote marker; quoted lines are in-story system messages.
pub const DEFAULT_QUOTE_MARKER: &str = ">";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub meta: MetaConfig,
}

/// Scanner configuration for chapter file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extensions treated as chapters (without the leading dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files or directories to ignore.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// Length check configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfig {
    /// Chapters with fewer non-whitespace characters are reported as LOW.
    #[serde(default = "default_threshold")]
    pub threshold: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Fourth-wall reference detection and fixing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetaConfig {
    #[serde(default = "default_skip_leading_lines")]
    pub skip_leading_lines: usize,

    #[serde(default = "default_quote_marker")]
    pub quote_marker: String,

    /// Forbidden patterns, combined by alternation in this order.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<ForbiddenPattern>,

    /// Substitution rules, applied in this order to every matching line.
    #[serde(default = "default_rules")]
    pub rules: Vec<SubstitutionRule>,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            skip_leading_lines: DEFAULT_SKIP_LEADING_LINES,
            quote_marker: DEFAULT_QUOTE_MARKER.to_string(),
            patterns: default_patterns(),
            rules: default_rules(),
        }
    }
}

/// A forbidden pattern [[meta.patterns]].
///
/// `not_after` is a guard: a match is discarded when the text right before it
/// ends with something matching the guard expression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForbiddenPattern {
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_after: Option<String>,
}

impl ForbiddenPattern {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            not_after: None,
        }
    }

    #[must_use]
    pub fn not_after(mut self, guard: &str) -> Self {
        self.not_after = Some(guard.to_string());
        self
    }
}

/// A substitution step [[meta.rules]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub pattern: String,

    /// Replacement text; `$1`-style group references are expanded.
    #[serde(default)]
    pub replacement: String,

    #[serde(default)]
    pub ignore_case: bool,
}

impl SubstitutionRule {
    #[must_use]
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            ignore_case: false,
        }
    }

    #[must_use]
    pub const fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

const fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

const fn default_skip_leading_lines() -> usize {
    DEFAULT_SKIP_LEADING_LINES
}

fn default_quote_marker() -> String {
    DEFAULT_QUOTE_MARKER.to_string()
}

/// Chapter and volume numbers, `ChNN` / `Chapter NN`, and "this/next chapter"
/// phrases. Headings (`# 第N章`) are allowed.
#[must_use]
pub fn default_patterns() -> Vec<ForbiddenPattern> {
    vec![
        ForbiddenPattern::new("第[一二三四五六七八九十0-9]+[卷章]").not_after("# "),
        ForbiddenPattern::new("Ch ?[0-9]+").not_after(r"\w"),
        ForbiddenPattern::new("Chapter ?[0-9]+"),
        ForbiddenPattern::new("卷末"),
        ForbiddenPattern::new("本章"),
        ForbiddenPattern::new("下一章"),
    ]
}

/// Rewrites from most to least specific. The last two rules are a catch-all
/// that rewrites any remaining `第N章` / `本章` on a flagged line, even when it
/// is not a fourth-wall reference.
#[must_use]
pub fn default_rules() -> Vec<SubstitutionRule> {
    vec![
        SubstitutionRule::new(r"[\(（].*?([卷章]完).*?[\)）]", ""),
        SubstitutionRule::new("第[一二三四五六七八九十0-9]+卷，完。", ""),
        SubstitutionRule::new("在第[一二三四五六七八九十0-9]+卷中", "在之前的行動中"),
        SubstitutionRule::new("第一卷的時候", "當初最早的時候"),
        SubstitutionRule::new("Ch ?[0-9]+ ?那次", "之前那次事件").ignore_case(),
        SubstitutionRule::new("在 ?Ch ?104 ?中", "在之前的測試中").ignore_case(),
        SubstitutionRule::new("第[0-9]+章", "前段時間"),
        SubstitutionRule::new("本章", "此段"),
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
