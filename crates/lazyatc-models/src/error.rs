//! Error types for the `lazyatc-models` crate.
//!
//! All fallible constructors and `FromStr` implementations in this crate
//! return variants of [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// An ICAO airport code failed validation.
    #[error("invalid ICAO airport code \"{value}\": {reason}")]
    InvalidICAOCode {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A flight level string was not a whole number.
    #[error("invalid flight level \"{value}\": {reason}")]
    InvalidFlightLevel {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A route option from the API was not shaped as expected.
    #[error("route option #{index} is malformed: {reason}")]
    MalformedRouteOption {
        /// Zero-based position of the offending element.
        index: usize,
        /// Human-readable explanation.
        reason: String,
    },

    /// No built-in preset carries the requested label.
    #[error("unknown preset: {label}")]
    UnknownPreset {
        /// The label that was looked up.
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_icao() {
        let err = ModelError::InvalidICAOCode {
            value: "YSS".into(),
            reason: "must be exactly 4 characters".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid ICAO airport code \"YSS\": must be exactly 4 characters"
        );
    }

    #[test]
    fn error_display_flight_level() {
        let err = ModelError::InvalidFlightLevel {
            value: "abc".into(),
            reason: "must be a whole number".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid flight level \"abc\": must be a whole number"
        );
    }

    #[test]
    fn error_display_malformed_route_option() {
        let err = ModelError::MalformedRouteOption {
            index: 2,
            reason: "missing `route`".into(),
        };
        assert_eq!(err.to_string(), "route option #2 is malformed: missing `route`");
    }

    #[test]
    fn error_display_unknown_preset() {
        let err = ModelError::UnknownPreset {
            label: "BN-CS".into(),
        };
        assert_eq!(err.to_string(), "unknown preset: BN-CS");
    }
}
