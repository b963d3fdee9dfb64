mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    Config, ContentConfig, DEFAULT_QUOTE_MARKER, DEFAULT_SKIP_LEADING_LINES, DEFAULT_THRESHOLD,
    ForbiddenPattern, MetaConfig, ScannerConfig, SubstitutionRule, default_patterns,
    default_rules,
};
pub use validation::validate_config;
