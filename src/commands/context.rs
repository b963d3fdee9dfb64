use std::path::{Path, PathBuf};

use crate::cli::{ColorChoice, ScanArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::ColorMode;
use crate::scanner::{ChapterMatcher, DirectoryScanner, FileScanner, relative_to_root};
use crate::Result;

/// A discovered chapter: the path used for I/O and the path shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFile {
    pub path: PathBuf,
    /// Relative to the scan root, always with `/` separators.
    pub display_path: String,
}

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path, the default locations, or
/// built-in defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if a configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// `--ext` replaces the configured extensions; `--exclude` adds to the configured globs.
pub(crate) fn apply_scan_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

/// Load the configuration for a scanning command and apply its CLI overrides.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded.
pub(crate) fn load_scan_config(args: &ScanArgs, no_config: bool) -> Result<Config> {
    let mut config = load_config(args.config.as_deref(), no_config)?;
    apply_scan_overrides(&mut config, args);
    Ok(config)
}

/// Discover chapter files under every root, in root order then walk order.
///
/// # Errors
/// Returns an error if an exclude glob is invalid or a root cannot be read.
pub(crate) fn collect_chapters(config: &Config, roots: &[PathBuf]) -> Result<Vec<ChapterFile>> {
    let scanner = DirectoryScanner::new(ChapterMatcher::from_config(&config.scanner)?);

    let mut chapters = Vec::new();
    for root in roots {
        for path in scanner.scan(root)? {
            let display_path = display_path(root, &path);
            chapters.push(ChapterFile { path, display_path });
        }
    }
    log::info!("Found {} chapter file(s)", chapters.len());
    Ok(chapters)
}

/// Path relative to `root`. A root that is itself the file shows its file name.
#[must_use]
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    relative_to_root(root, path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
