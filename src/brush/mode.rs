//! Brush render-mode selection.

use std::fmt;
use std::str::FromStr;

/// How a `draw` call turns a pointer segment into pixels.
///
/// Each variant is its own render strategy; the engine dispatches on it with
/// a `match`, so a new brush kind is a new variant plus one arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrushMode {
    /// Straight vector segment with round caps, no smoothing (default)
    #[default]
    Line,
    /// Repeated image stamps sized by the smoothing buffer
    Stamp,
}

impl BrushMode {
    pub fn is_stamp(self) -> bool {
        self == Self::Stamp
    }

    /// Maps the host's "stamp enabled" switch onto a mode.
    pub fn from_stamp_flag(enabled: bool) -> Self {
        if enabled { Self::Stamp } else { Self::Line }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Stamp => "stamp",
        }
    }
}

impl fmt::Display for BrushMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrushMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" | "pen" => Ok(Self::Line),
            "stamp" | "brush" => Ok(Self::Stamp),
            other => Err(format!("Unknown brush mode '{}' (expected line or stamp)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_names_and_aliases() {
        assert_eq!("line".parse::<BrushMode>(), Ok(BrushMode::Line));
        assert_eq!("Stamp".parse::<BrushMode>(), Ok(BrushMode::Stamp));
        assert_eq!("brush".parse::<BrushMode>(), Ok(BrushMode::Stamp));
        assert!("spray".parse::<BrushMode>().is_err());
    }

    #[test]
    fn stamp_flag_round_trips() {
        assert!(BrushMode::from_stamp_flag(true).is_stamp());
        assert!(!BrushMode::from_stamp_flag(false).is_stamp());
        assert_eq!(BrushMode::default(), BrushMode::Line);
    }
}
