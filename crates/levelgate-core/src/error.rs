use thiserror::Error;

/// Errors produced while parsing textual configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Name does not match any severity
    #[error("unknown severity '{0}' (expected one of trace, debug, info, warn, error, fatal)")]
    UnknownSeverity(String),
    /// Name does not match any log format
    #[error("unknown log format '{0}' (expected text or json)")]
    UnknownFormat(String),
    /// Value is neither "on" nor "off"
    #[error("invalid log switch '{0}' (expected on or off)")]
    InvalidSwitch(String),
}
