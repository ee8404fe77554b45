use anyhow::{Context, Result};
use levelgate_core::logging::config::LoggingConfig;
use levelgate_core::logging::formatter::LogFormat;
use levelgate_core::{DisplayFlags, LogSwitch, Severity};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tool configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[logging]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Facade threshold (trace, debug, info, warn, error, fatal)
    pub level: Option<Severity>,
    /// Backend `EnvFilter` directive
    pub filter: Option<String>,
    /// Log file, relative paths are resolved against the config file directory
    pub file: Option<String>,
    pub console: Option<bool>,
    /// text or json
    pub format: Option<LogFormat>,
    /// Print timestamps
    pub time: Option<bool>,
    /// Print the level column
    pub show_level: Option<bool>,
    /// SQL log switch (on or off)
    pub sql: Option<LogSwitch>,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub level: Option<Severity>,
    pub file: Option<PathBuf>,
    pub format: Option<LogFormat>,
    pub verbose: bool,
}

impl Config {
    /// Loads configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the config file (can be absolute or relative)
    /// * `base_path` - Optional base path for resolving relative paths in config.
    ///   If None, uses the directory of the config file as base.
    pub fn load(path: &str, base_path: Option<&Path>) -> Result<Self> {
        let config_path = Path::new(path);
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        let base =
            base_path.unwrap_or_else(|| config_path.parent().unwrap_or_else(|| Path::new(".")));
        config.resolve_relative_paths(base);

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    ///
    /// Level, format and sql are already checked while parsing.
    pub fn validate(&self) -> Result<()> {
        let logging = &self.logging;

        if let Some(filter) = &logging.filter {
            if filter.trim().is_empty() {
                anyhow::bail!("[logging] filter cannot be empty");
            }
        }
        Ok(())
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(ref file) = self.logging.file {
            if !Path::new(file).is_absolute() {
                self.logging.file = Some(base.join(file).to_string_lossy().to_string());
            }
        }
    }

    /// Merges the file with command-line overrides into a backend configuration
    pub fn logging_config(&self, overrides: &Overrides) -> Result<LoggingConfig> {
        self.merge(overrides, LoggingConfig::default())
    }

    /// Same as [`Config::logging_config`] with explicit environment defaults
    pub fn merge(&self, overrides: &Overrides, defaults: LoggingConfig) -> Result<LoggingConfig> {
        let section = &self.logging;

        let level = if overrides.verbose {
            Severity::Debug
        } else {
            overrides
                .level
                .or(section.level)
                .unwrap_or(defaults.level)
        };

        let flags = defaults
            .flags
            .with(DisplayFlags::TIME, section.time.unwrap_or(true))
            .with(DisplayFlags::LEVEL, section.show_level.unwrap_or(true));

        let config = LoggingConfig {
            level,
            filter: section.filter.clone(),
            file: overrides
                .file
                .clone()
                .or_else(|| section.file.as_ref().map(PathBuf::from))
                .or(defaults.file),
            console: section.console.unwrap_or(true),
            format: overrides
                .format
                .or(section.format)
                .unwrap_or(defaults.format),
            flags,
            sql: section.sql.unwrap_or(defaults.sql),
        };

        if !config.console && config.file.is_none() {
            anyhow::bail!("[logging] console is disabled and no file is configured");
        }
        Ok(config)
    }
}
