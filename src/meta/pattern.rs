use regex::{Regex, RegexBuilder};

use crate::config::ForbiddenPattern;
use crate::error::{ChapterGuardError, Result};

struct CompiledPattern {
    regex: Regex,
    /// Anchored at the end: `(?:guard)$`, tested against the text before a match.
    guard: Option<Regex>,
}

impl CompiledPattern {
    fn compile(pattern: &ForbiddenPattern) -> Result<Self> {
        let regex = build_case_insensitive(&pattern.pattern, &pattern.pattern)?;
        let guard = pattern
            .not_after
            .as_deref()
            .map(|guard| build_case_insensitive(&format!("(?:{guard})$"), guard))
            .transpose()?;
        Ok(Self { regex, guard })
    }

    fn guard_allows(&self, haystack: &str, start: usize) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|guard| !guard.is_match(&haystack[..start]))
    }

    /// First match starting at or after `from` whose guard is satisfied.
    fn find_from(&self, haystack: &str, from: usize) -> Option<(usize, usize)> {
        let mut at = from;
        while at <= haystack.len() {
            let m = self.regex.find_at(haystack, at)?;
            if self.guard_allows(haystack, m.start()) {
                return Some((m.start(), m.end()));
            }
            at = next_char_boundary(haystack, m.start());
        }
        None
    }
}

fn build_case_insensitive(pattern: &str, reported_as: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ChapterGuardError::InvalidRegex {
            pattern: reported_as.to_string(),
            source,
        })
}

fn next_char_boundary(haystack: &str, index: usize) -> usize {
    haystack[index..]
        .chars()
        .next()
        .map_or(index + 1, |c| index + c.len_utf8())
}

/// Ordered forbidden patterns combined by case-insensitive alternation.
///
/// Matching follows leftmost-first alternation: at the leftmost position where
/// any pattern matches, the earliest pattern in the list wins.
pub struct ForbiddenPatternSet {
    patterns: Vec<CompiledPattern>,
}

impl ForbiddenPatternSet {
    /// Compiles every pattern and guard.
    ///
    /// # Errors
    /// Returns `InvalidRegex` for the first pattern or guard that does not compile.
    pub fn new(patterns: &[ForbiddenPattern]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(CompiledPattern::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.find_iter(haystack).next().is_some()
    }

    /// Iterates over successive non-overlapping matches.
    #[must_use]
    pub fn find_iter<'s, 'h>(&'s self, haystack: &'h str) -> Matches<'s, 'h> {
        Matches {
            set: self,
            haystack,
            pos: 0,
            next_per_pattern: vec![None; self.patterns.len()],
        }
    }
}

/// Iterator over the matched substrings of a [`ForbiddenPatternSet`].
pub struct Matches<'s, 'h> {
    set: &'s ForbiddenPatternSet,
    haystack: &'h str,
    pos: usize,
    /// Cached lookahead per pattern; `Some(None)` means exhausted.
    next_per_pattern: Vec<Option<Option<(usize, usize)>>>,
}

impl<'h> Iterator for Matches<'_, 'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.haystack.len() {
            return None;
        }

        let mut best: Option<(usize, usize)> = None;
        for (pattern, cached) in self.set.patterns.iter().zip(&mut self.next_per_pattern) {
            let stale = match cached {
                None => true,
                Some(Some((start, _))) => *start < self.pos,
                Some(None) => false,
            };
            if stale {
                *cached = Some(pattern.find_from(self.haystack, self.pos));
            }
            if let Some(Some(candidate)) = *cached
                && best.is_none_or(|(start, _)| candidate.0 < start)
            {
                best = Some(candidate);
            }
        }

        let (start, end) = best?;
        self.pos = if end > start {
            end
        } else {
            next_char_boundary(self.haystack, end)
        };
        Some(&self.haystack[start..end])
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
