use globset::Glob;

use crate::error::{ChapterGuardError, Result};
use crate::meta::{ForbiddenPatternSet, RuleChain};

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a required list is empty, the quote marker is empty,
/// or any glob or regular expression fails to compile.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_meta_section(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(ChapterGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }
    if let Some(ext) = config
        .scanner
        .extensions
        .iter()
        .find(|ext| ext.is_empty() || ext.starts_with('.'))
    {
        return Err(ChapterGuardError::Config(format!(
            "scanner.extensions entries must be non-empty and without a leading dot, got '{ext}'"
        )));
    }
    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|source| ChapterGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

fn validate_meta_section(config: &Config) -> Result<()> {
    if config.meta.quote_marker.is_empty() {
        return Err(ChapterGuardError::Config(
            "meta.quote_marker must not be empty".to_string(),
        ));
    }
    if config.meta.patterns.is_empty() {
        return Err(ChapterGuardError::Config(
            "meta.patterns must contain at least one pattern".to_string(),
        ));
    }
    ForbiddenPatternSet::new(&config.meta.patterns)?;
    RuleChain::new(&config.meta.rules)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ForbiddenPattern, SubstitutionRule};

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn empty_extensions_rejected() {
        let mut config = Config::default();
        config.scanner.extensions.clear();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("scanner.extensions"));
    }

    #[test]
    fn dotted_extension_rejected() {
        let mut config = Config::default();
        config.scanner.extensions = vec![".md".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn invalid_exclude_glob_rejected() {
        let mut config = Config::default();
        config.scanner.exclude = vec!["[broken".to_string()];
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ChapterGuardError::InvalidPattern { .. }));
    }

    #[test]
    fn empty_quote_marker_rejected() {
        let mut config = Config::default();
        config.meta.quote_marker = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_pattern_list_rejected() {
        let mut config = Config::default();
        config.meta.patterns.clear();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("meta.patterns"));
    }

    #[test]
    fn invalid_guard_rejected() {
        let mut config = Config::default();
        config.meta.patterns = vec![ForbiddenPattern::new("本章").not_after("(")];
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ChapterGuardError::InvalidRegex { .. }));
    }

    #[test]
    fn invalid_rule_rejected() {
        let mut config = Config::default();
        config.meta.rules = vec![SubstitutionRule::new("(", "x")];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_rule_list_allowed() {
        let mut config = Config::default();
        config.meta.rules.clear();
        assert!(validate_config(&config).is_ok());
    }
}
