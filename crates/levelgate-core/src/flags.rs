use crate::error::ParseError;
use serde::Deserialize;
use std::ops::BitOr;
use std::str::FromStr;

/// Formatting options for installed backends. Never consulted by the level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayFlags(u8);

impl DisplayFlags {
    /// Prefix each line with a `%Y/%m/%d %H:%M:%S` timestamp
    pub const TIME: DisplayFlags = DisplayFlags(1);
    /// Print the level column
    pub const LEVEL: DisplayFlags = DisplayFlags(1 << 1);

    pub const fn empty() -> Self {
        DisplayFlags(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped
    pub const fn from_bits_truncate(bits: u8) -> Self {
        DisplayFlags(bits & (Self::TIME.0 | Self::LEVEL.0))
    }

    pub const fn contains(self, other: DisplayFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns a copy with `other` set or cleared
    pub const fn with(self, other: DisplayFlags, enabled: bool) -> Self {
        if enabled {
            DisplayFlags(self.0 | other.0)
        } else {
            DisplayFlags(self.0 & !other.0)
        }
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        DisplayFlags::TIME | DisplayFlags::LEVEL
    }
}

impl BitOr for DisplayFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        DisplayFlags(self.0 | rhs.0)
    }
}

/// On/off switch used for the SQL log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LogSwitch {
    #[default]
    On,
    Off,
}

impl LogSwitch {
    pub const ON: &'static str = "on";
    pub const OFF: &'static str = "off";

    pub const fn is_on(self) -> bool {
        matches!(self, LogSwitch::On)
    }
}

impl FromStr for LogSwitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            Self::ON => Ok(LogSwitch::On),
            Self::OFF => Ok(LogSwitch::Off),
            other => Err(ParseError::InvalidSwitch(other.to_string())),
        }
    }
}

impl TryFrom<String> for LogSwitch {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_include_time_and_level() {
        let flags = DisplayFlags::default();
        assert!(flags.contains(DisplayFlags::TIME));
        assert!(flags.contains(DisplayFlags::LEVEL));
        assert_eq!(flags.bits(), 3);
    }

    #[test]
    fn with_toggles_single_bit() {
        let flags = DisplayFlags::default().with(DisplayFlags::TIME, false);
        assert!(!flags.contains(DisplayFlags::TIME));
        assert!(flags.contains(DisplayFlags::LEVEL));
        assert_eq!(DisplayFlags::from_bits_truncate(0xff), DisplayFlags::default());
    }

    #[test]
    fn switch_parses_on_off_only() {
        assert_eq!("on".parse::<LogSwitch>(), Ok(LogSwitch::On));
        assert_eq!("off".parse::<LogSwitch>(), Ok(LogSwitch::Off));
        assert!("yes".parse::<LogSwitch>().is_err());
        assert_eq!(
            serde_json::from_str::<LogSwitch>("\"off\"").unwrap(),
            LogSwitch::Off
        );
    }
}
