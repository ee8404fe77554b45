use crate::flags::{DisplayFlags, LogSwitch};
use crate::logging::formatter::LogFormat;
use crate::severity::Severity;
use std::path::PathBuf;

/// Environment variable holding the facade threshold
pub const LEVEL_ENV: &str = "LEVELGATE_LEVEL";
/// Environment variable holding the log file path
pub const LOG_FILE_ENV: &str = "LEVELGATE_LOG_FILE";
/// Backend directive used when neither `RUST_LOG` nor `filter` is set.
/// Everything under the facade target passes so the facade threshold decides;
/// other targets only from WARN up.
pub const DEFAULT_FILTER: &str = "levelgate=trace,warn";

/// Configuration for installing the tracing backend
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Facade threshold applied to the default logger
    pub level: Severity,
    /// `EnvFilter` directive for the backend (`RUST_LOG` takes precedence)
    pub filter: Option<String>,
    /// Path to log file (None = no file logging)
    pub file: Option<PathBuf>,
    /// Log to console (true) or only to file (false)
    pub console: bool,
    /// Log format (text or json)
    pub format: LogFormat,
    pub flags: DisplayFlags,
    pub sql: LogSwitch,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_env_values(
            std::env::var(LEVEL_ENV).ok().as_deref(),
            std::env::var(LOG_FILE_ENV).ok().as_deref(),
        )
    }
}

impl LoggingConfig {
    /// Defaults built from the values of `LEVELGATE_LEVEL` and
    /// `LEVELGATE_LOG_FILE`. An unparsable level falls back to `Info`.
    pub fn from_env_values(level: Option<&str>, file: Option<&str>) -> Self {
        Self {
            level: level
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            filter: None,
            file: file.filter(|path| !path.is_empty()).map(PathBuf::from),
            console: true,
            format: LogFormat::Text,
            flags: DisplayFlags::default(),
            sql: LogSwitch::On,
        }
    }

    /// Create a new logging configuration
    pub fn new(level: Severity, file: Option<PathBuf>, console: bool, format: LogFormat) -> Self {
        Self {
            level,
            filter: None,
            file,
            console,
            format,
            flags: DisplayFlags::default(),
            sql: LogSwitch::On,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_sql(mut self, sql: LogSwitch) -> Self {
        self.sql = sql;
        self
    }

    /// Directive the backend filter is built from when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }
}
