//! Structured logging with tracing
//!
//! Centralized logging setup on top of `tracing-subscriber`. The explain
//! report owns stdout, so every log layer writes to stderr or to a file.

use adx_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::{LOG_ENV_FILTER, LOG_FILE_STEM};
use tracing::{Level, debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `ADX_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| level_filter(level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_STEM)),
        )
    });

    // json and text layers have different types, hence the separate branches
    let initialized = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        let registry = Registry::default().with(filter).with(stderr);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(file).try_init()
        } else {
            registry.try_init()
        }
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);
        let registry = Registry::default().with(filter).with(stderr);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(file).try_init()
        } else {
            registry.try_init()
        }
    };

    initialized.map_err(|err| Error::infrastructure_with_source("Failed to initialize logging", err))?;

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Filter enabling `level` and everything more severe
///
/// Built from the parsed level, so aliases such as `warning` are never
/// mistaken for a target name.
pub fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!(
                "Invalid log level: {level}. Use trace, debug, info, warn, or error"
            ),
            source: None,
        }),
    }
}

/// Log where the configuration came from
///
/// Called once logging is up, since the configuration decides the log level.
pub fn log_config_loaded(config_path: Option<&std::path::Path>) {
    match config_path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }
}
