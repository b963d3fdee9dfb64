use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChapterGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read directory: {path}")]
    DirectoryWalk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChapterGuardError {
    /// Short category name used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::DirectoryWalk { .. } => "Scan",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) | Self::Csv(_) => "Output",
        }
    }

    /// Message including the underlying cause, if any.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                format!("{self}: {source}")
            }
            Self::DirectoryWalk { source, .. } => format!("{self}: {source}"),
            Self::InvalidPattern { source, .. } => format!("{self}: {source}"),
            Self::InvalidRegex { source, .. } => format!("{self}: {source}"),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChapterGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
