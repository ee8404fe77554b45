pub mod config;
pub mod file_writer;
pub mod formatter;

use crate::global;
use crate::severity::Severity;
use anyhow::{Context, Result};
use config::LoggingConfig;
use std::path::PathBuf;

/// Installs the tracing subscriber behind [`crate::backend::TracingBackend`]
/// and pushes the facade settings onto the default logger
pub fn init(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.filter_directive()))
        .with_context(|| format!("Invalid log filter: {}", config.filter_directive()))?;

    let console_layer = config.console.then(|| {
        formatter::fmt_layer(std::io::stderr, config.format, config.flags, true)
    });
    let file_layer = config.file.as_ref().map(|log_file| {
        let file_writer = file_writer::FileWriter::new(log_file.clone());
        formatter::fmt_layer(file_writer, config.format, config.flags, false)
    });

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    apply(&config);
    Ok(())
}

/// Pushes the facade-side settings onto the default logger
pub fn apply(config: &LoggingConfig) {
    let logger = global::std_logger();
    logger.set_level(config.level);
    logger.set_flags(config.flags);
    logger.set_sql(config.sql);
}

/// Initialize logging with default configuration
pub fn init_default() -> Result<()> {
    init(LoggingConfig::default())
}

/// Initialize logging from environment variables and CLI arguments
pub fn init_from_args(
    log_level: Option<Severity>,
    log_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    init(config_from_args(
        LoggingConfig::default(),
        log_level,
        log_file,
        verbose,
    ))
}

/// Layers CLI arguments over `defaults`: `verbose` forces `Debug`, then an
/// explicit level, then the default; an explicit file replaces the default one
pub fn config_from_args(
    defaults: LoggingConfig,
    log_level: Option<Severity>,
    log_file: Option<PathBuf>,
    verbose: bool,
) -> LoggingConfig {
    let level = if verbose {
        Severity::Debug
    } else {
        log_level.unwrap_or(defaults.level)
    };

    LoggingConfig {
        level,
        file: log_file.or(defaults.file),
        ..defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_defaults() -> LoggingConfig {
        LoggingConfig::from_env_values(Some("warn"), Some("/tmp/env.log"))
    }

    #[test]
    fn env_level_applies_without_arguments() {
        let config = config_from_args(env_defaults(), None, None, false);
        assert_eq!(config.level, Severity::Warn);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/env.log")));
    }

    #[test]
    fn explicit_arguments_beat_env() {
        let config = config_from_args(
            env_defaults(),
            Some(Severity::Trace),
            Some(PathBuf::from("/tmp/cli.log")),
            false,
        );
        assert_eq!(config.level, Severity::Trace);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/cli.log")));
    }

    #[test]
    fn verbose_forces_debug() {
        let config = config_from_args(env_defaults(), Some(Severity::Error), None, true);
        assert_eq!(config.level, Severity::Debug);
    }
}
