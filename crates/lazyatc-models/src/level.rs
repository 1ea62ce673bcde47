//! Flight levels and the alternate-level suggestions offered to a pilot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// FlightLevel
// ---------------------------------------------------------------------------

/// A flight level in hundreds of feet (e.g. `FlightLevel(350)` is FL350).
///
/// Displays zero-padded to three digits, so FL50 reads `FL050`.
///
/// # Examples
///
/// ```
/// use lazyatc_models::FlightLevel;
///
/// assert_eq!(FlightLevel::new(350).to_string(), "FL350");
/// assert_eq!(FlightLevel::new(50).to_string(), "FL050");
///
/// let parsed = FlightLevel::parse_input(" 370 ").unwrap();
/// assert_eq!(parsed.value(), 370);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightLevel(i32);

impl FlightLevel {
    /// Create a flight level from its numeric value.
    pub fn new(level: i32) -> Self {
        Self(level)
    }

    /// Return the numeric value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Parse a requested level typed into a form field.
    ///
    /// Surrounding whitespace is ignored; the remainder must be a whole
    /// number with an optional sign.
    pub fn parse_input(input: &str) -> Result<Self, ModelError> {
        input
            .trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ModelError::InvalidFlightLevel {
                value: input.to_string(),
                reason: "must be a whole number".to_string(),
            })
    }

    /// The level `delta` hundreds of feet away, saturating at the `i32` range.
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta))
    }
}

impl fmt::Display for FlightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FL{:03}", self.0)
    }
}

// ---------------------------------------------------------------------------
// LevelSuggestion
// ---------------------------------------------------------------------------

/// A pair of alternate flight levels offered instead of a filed one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSuggestion {
    /// First level offered.
    pub lower: FlightLevel,
    /// Second level offered.
    pub upper: FlightLevel,
}

impl LevelSuggestion {
    /// Spacing either side of a filed level.
    pub const FILED_STEP: i32 = 10;

    /// Spacing between the two levels offered with a preset.
    pub const PRESET_STEP: i32 = 20;

    /// The levels one step below and above `filed`.
    pub fn around(filed: FlightLevel) -> Self {
        Self {
            lower: filed.offset(-Self::FILED_STEP),
            upper: filed.offset(Self::FILED_STEP),
        }
    }

    /// The levels offered alongside a preset route.
    ///
    /// Even-level routes start at FL300, odd-level routes at FL310; the
    /// second level is two thousand feet above the first.
    pub fn for_parity(even: bool) -> Self {
        let base = FlightLevel::new(if even { 300 } else { 310 });
        Self {
            lower: base,
            upper: base.offset(Self::PRESET_STEP),
        }
    }
}

impl fmt::Display for LevelSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Consider {} or {} instead", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- FlightLevel -------------------------------------------------------

    #[test]
    fn display_zero_pads() {
        assert_eq!(FlightLevel::new(5).to_string(), "FL005");
        assert_eq!(FlightLevel::new(90).to_string(), "FL090");
        assert_eq!(FlightLevel::new(410).to_string(), "FL410");
        assert_eq!(FlightLevel::new(1000).to_string(), "FL1000");
    }

    #[test]
    fn display_negative_keeps_sign_in_width() {
        assert_eq!(FlightLevel::new(-5).to_string(), "FL-05");
    }

    #[test]
    fn parse_input_trims() {
        assert_eq!(FlightLevel::parse_input("  350\n").unwrap(), FlightLevel::new(350));
        assert_eq!(FlightLevel::parse_input("-20").unwrap(), FlightLevel::new(-20));
    }

    #[test]
    fn parse_input_rejects_non_numeric() {
        assert!(FlightLevel::parse_input("").is_err());
        assert!(FlightLevel::parse_input("FL350").is_err());
        assert!(FlightLevel::parse_input("35O").is_err());
        assert!(FlightLevel::parse_input("35.5").is_err());
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(FlightLevel::new(i32::MAX).offset(10).value(), i32::MAX);
    }

    // -- LevelSuggestion ---------------------------------------------------

    #[test]
    fn around_filed_level() {
        let s = LevelSuggestion::around(FlightLevel::new(350));
        assert_eq!(s.to_string(), "Consider FL340 or FL360 instead");
    }

    #[test]
    fn around_low_level_is_padded() {
        let s = LevelSuggestion::around(FlightLevel::new(60));
        assert_eq!(s.to_string(), "Consider FL050 or FL070 instead");
    }

    #[test]
    fn parity_pairs() {
        assert_eq!(
            LevelSuggestion::for_parity(true).to_string(),
            "Consider FL300 or FL320 instead"
        );
        assert_eq!(
            LevelSuggestion::for_parity(false).to_string(),
            "Consider FL310 or FL330 instead"
        );
    }
}
