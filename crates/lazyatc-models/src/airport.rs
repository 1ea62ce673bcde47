//! Airport identifiers and the route query built from them.
//!
//! - [`ICAOAirportCode`]: a four-character ICAO airport designator.
//! - [`RouteQuery`]: a departure/destination pair sent to the routes API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// ICAOAirportCode
// ---------------------------------------------------------------------------

/// A four-character ICAO airport code (e.g. `"YSSY"`, `"YMML"`).
///
/// Two construction paths exist:
///
/// - [`normalize`](Self::normalize) accepts free-form form input: it trims
///   whitespace and upper-cases, then only checks the length. This is the
///   gate used before a route request is issued.
/// - [`FromStr`] / [`TryFrom`] are strict: exactly 4 uppercase ASCII letters.
///
/// # Examples
///
/// ```
/// use lazyatc_models::ICAOAirportCode;
///
/// let code = ICAOAirportCode::normalize("  yssy ").unwrap();
/// assert_eq!(code.as_str(), "YSSY");
///
/// let parsed: ICAOAirportCode = "YMML".parse().unwrap();
/// assert_eq!(parsed.to_string(), "YMML");
///
/// assert!(ICAOAirportCode::normalize("YSS").is_err());
/// assert!("ymml".parse::<ICAOAirportCode>().is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ICAOAirportCode(String);

impl ICAOAirportCode {
    /// Number of characters in an ICAO airport code.
    pub const LEN: usize = 4;

    /// Trim and upper-case `input`, accepting it when exactly
    /// [`LEN`](Self::LEN) characters remain.
    pub fn normalize(input: &str) -> Result<Self, ModelError> {
        let upper = input.trim().to_uppercase();
        if upper.chars().count() == Self::LEN {
            Ok(Self(upper))
        } else {
            Err(ModelError::InvalidICAOCode {
                value: input.to_string(),
                reason: "must be exactly 4 characters".to_string(),
            })
        }
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), ModelError> {
        if s.len() != Self::LEN || !s.bytes().all(|b| b.is_ascii_uppercase()) {
            Err(ModelError::InvalidICAOCode {
                value: s.to_string(),
                reason: "must be exactly 4 uppercase ASCII letters".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ICAOAirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ICAOAirportCode {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ICAOAirportCode {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl From<ICAOAirportCode> for String {
    fn from(code: ICAOAirportCode) -> Self {
        code.0
    }
}

impl FromStr for ICAOAirportCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// ---------------------------------------------------------------------------
// RouteQuery
// ---------------------------------------------------------------------------

/// A departure/destination pair for which alternate routes are requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    /// Departure aerodrome.
    pub departure: ICAOAirportCode,
    /// Destination aerodrome.
    pub destination: ICAOAirportCode,
}

impl RouteQuery {
    /// Build a query from raw form input, normalising both codes.
    ///
    /// Fails on the first code that is not exactly 4 characters once trimmed.
    pub fn from_input(departure: &str, destination: &str) -> Result<Self, ModelError> {
        Ok(Self {
            departure: ICAOAirportCode::normalize(departure)?,
            destination: ICAOAirportCode::normalize(destination)?,
        })
    }

    /// Query-string pairs in the order the routes API expects them.
    pub fn params(&self) -> [(&'static str, &str); 2] {
        [
            ("dept", self.departure.as_str()),
            ("dest", self.destination.as_str()),
        ]
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.departure, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- ICAOAirportCode ---------------------------------------------------

    #[test]
    fn normalize_uppercases_and_trims() {
        let code = ICAOAirportCode::normalize(" ymml\t").unwrap();
        assert_eq!(code.as_str(), "YMML");
    }

    #[test]
    fn normalize_accepts_any_four_characters() {
        // Only the length is checked on the form path.
        assert!(ICAOAirportCode::normalize("Y5SY").is_ok());
        assert!(ICAOAirportCode::normalize("yssy").is_ok());
        assert!(ICAOAirportCode::normalize("YSSY").is_ok());
    }

    #[test]
    fn normalize_rejects_wrong_length() {
        assert!(ICAOAirportCode::normalize("").is_err());
        assert!(ICAOAirportCode::normalize("YSS").is_err());
        assert!(ICAOAirportCode::normalize("YSSYY").is_err());
        assert!(ICAOAirportCode::normalize("   ").is_err());
    }

    #[test]
    fn strict_parse_rejects_lowercase_and_digits() {
        assert!("yssy".parse::<ICAOAirportCode>().is_err());
        assert!("Y5SY".parse::<ICAOAirportCode>().is_err());
        assert!("YSSY".parse::<ICAOAirportCode>().is_ok());
    }

    #[test]
    fn serde_round_trip_validates() {
        let code: ICAOAirportCode = serde_json::from_str("\"YBBN\"").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"YBBN\"");
        assert!(serde_json::from_str::<ICAOAirportCode>("\"ybbn\"").is_err());
    }

    // -- RouteQuery --------------------------------------------------------

    #[test]
    fn route_query_from_input() {
        let q = RouteQuery::from_input("yssy", " ymml ").unwrap();
        assert_eq!(q.departure.as_str(), "YSSY");
        assert_eq!(q.destination.as_str(), "YMML");
        assert_eq!(q.to_string(), "YSSY-YMML");
    }

    #[test]
    fn route_query_rejects_either_bad_code() {
        assert!(RouteQuery::from_input("YSS", "YMML").is_err());
        assert!(RouteQuery::from_input("YSSY", "YMMLX").is_err());
    }

    #[test]
    fn route_query_params_order() {
        let q = RouteQuery::from_input("YMML", "YSSY").unwrap();
        assert_eq!(q.params(), [("dept", "YMML"), ("dest", "YSSY")]);
    }
}
