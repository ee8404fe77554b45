use crate::error::ParseError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Display names indexed by rank
pub const LEVEL_NAMES: [&str; 6] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

/// Logging severity, from low to high. Higher means more serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Severity {
    /// All severities in ascending order
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Integer rank used for threshold comparisons
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case display name ("TRACE".."FATAL")
    pub const fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// Converts a raw rank back into a severity
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Severity::Trace),
            1 => Some(Severity::Debug),
            2 => Some(Severity::Info),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Error),
            5 => Some(Severity::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseError::UnknownSeverity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseError;

    // `Self::Error` would be ambiguous with the `Error` variant.
    fn try_from(value: String) -> Result<Self, ParseError> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_rank() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
    }

    #[test]
    fn names_match_table() {
        let names: Vec<_> = Severity::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, LEVEL_NAMES);
        assert_eq!(Severity::Warn.to_string(), "WARN");
    }

    #[test]
    fn parses_display_names_case_insensitively() {
        for severity in Severity::ALL {
            assert_eq!(severity.name().parse::<Severity>(), Ok(severity));
            assert_eq!(
                severity.name().to_lowercase().parse::<Severity>(),
                Ok(severity)
            );
        }
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warn));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err, ParseError::UnknownSeverity("verbose".into()));
    }

    #[test]
    fn deserializes_through_parser() {
        let level: Severity = serde_json::from_str("\"Warning\"").unwrap();
        assert_eq!(level, Severity::Warn);
        assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
    }

    #[test]
    fn from_rank_is_bounded() {
        assert_eq!(Severity::from_rank(4), Some(Severity::Error));
        assert_eq!(Severity::from_rank(6), None);
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
