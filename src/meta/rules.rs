use regex::{Regex, RegexBuilder};

use crate::config::SubstitutionRule;
use crate::error::{ChapterGuardError, Result};

struct CompiledRule {
    regex: Regex,
    replacement: String,
}

/// Ordered substitution pipeline. Each rule rewrites the output of the
/// previous one, so a later rule sees text produced by an earlier one.
pub struct RuleChain {
    rules: Vec<CompiledRule>,
}

impl RuleChain {
    /// Compiles the rules in order.
    ///
    /// # Errors
    /// Returns `InvalidRegex` for the first rule whose pattern does not compile.
    pub fn new(rules: &[SubstitutionRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(rule.ignore_case)
                    .build()
                    .map_err(|source| ChapterGuardError::InvalidRegex {
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                Ok(CompiledRule {
                    regex,
                    replacement: rule.replacement.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule over `line`, in order.
    #[must_use]
    pub fn apply(&self, line: &str) -> String {
        let mut current = line.to_string();
        for rule in &self.rules {
            current = rule
                .regex
                .replace_all(&current, rule.replacement.as_str())
                .into_owned();
        }
        current
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
