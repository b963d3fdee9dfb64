use log::LevelFilter;

/// Log level for the `-q` / `-v` flags: quiet shows errors only, the default
/// shows warnings, `-v` adds info and `-vv` adds debug.
#[must_use]
pub const fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the stderr logger. `RUST_LOG`, when set, overrides the flag-derived level.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_filter(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr);
    builder.try_init().ok();
}
