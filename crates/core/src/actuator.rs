//! RGB LED actuator vocabulary.
//!
//! No hardware is driven; the API acknowledges the requested color only.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Colors the status LED accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Off,
    Red,
    Green,
    Blue,
}

impl LedColor {
    pub const ALL: [LedColor; 4] = [LedColor::Off, LedColor::Red, LedColor::Green, LedColor::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            LedColor::Off => "off",
            LedColor::Red => "red",
            LedColor::Green => "green",
            LedColor::Blue => "blue",
        }
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedColor {
    type Err = CoreError;

    /// Exact, case-sensitive match against the allowed names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LedColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(invalid_color)
    }
}

/// Error returned for any color outside [`LedColor::ALL`].
pub fn invalid_color() -> CoreError {
    CoreError::Validation(
        "Invalid color. Allowed values are: off, red, green, blue.".to_string(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_allowed_colors() {
        assert_eq!("off".parse::<LedColor>().unwrap(), LedColor::Off);
        assert_eq!("red".parse::<LedColor>().unwrap(), LedColor::Red);
        assert_eq!("green".parse::<LedColor>().unwrap(), LedColor::Green);
        assert_eq!("blue".parse::<LedColor>().unwrap(), LedColor::Blue);
    }

    #[test]
    fn rejects_unknown_colors() {
        assert_matches!("purple".parse::<LedColor>(), Err(CoreError::Validation(_)));
        assert_matches!("".parse::<LedColor>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_matches!("Red".parse::<LedColor>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn display_round_trips_name() {
        for color in LedColor::ALL {
            assert_eq!(color.to_string().parse::<LedColor>().unwrap(), color);
        }
    }
}
