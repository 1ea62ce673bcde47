//! Request modes, route options returned by the API, and the entries shown
//! in the result list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;
use crate::level::LevelSuggestion;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// What the controller is asking about.
///
/// Exactly one mode is active at a time. It decides which input fields are
/// shown and how a selected result is turned into phraseology.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Alternate routes between two aerodromes.
    #[default]
    Route,
    /// Alternate flight levels around a filed level.
    Altitude,
}

impl Mode {
    /// Label shown on the mode toggle.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Route => "ROUTE",
            Mode::Altitude => "ALT",
        }
    }
}

// ---------------------------------------------------------------------------
// RouteOption
// ---------------------------------------------------------------------------

/// Aircraft label used when a route option is not restricted to a type.
pub const ANY_AIRCRAFT: &str = "Any";

/// One alternate route suggested by the routes API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteOption {
    /// Aircraft type the route applies to, `None` for any type.
    #[serde(rename = "acft", default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
    /// Route text, e.g. `"DOSEL Y59 RIVET"`.
    pub route: String,
}

impl RouteOption {
    /// Create a route option.
    pub fn new(aircraft: Option<&str>, route: &str) -> Self {
        Self {
            aircraft: aircraft.map(str::to_string),
            route: route.to_string(),
        }
    }

    /// Interpret one element of the API's `routes` array.
    ///
    /// `acft` may be absent or `null`; `route` must be a string. `index` is
    /// only used to describe the failure.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, ModelError> {
        let malformed = |reason: &str| ModelError::MalformedRouteOption {
            index,
            reason: reason.to_string(),
        };

        let object = value.as_object().ok_or_else(|| malformed("not an object"))?;

        let aircraft = match object.get("acft") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(malformed("`acft` is not a string")),
        };

        let route = match object.get("route") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(malformed("`route` is not a string")),
            None => return Err(malformed("missing `route`")),
        };

        Ok(Self { aircraft, route })
    }

    /// Aircraft label for display, falling back to [`ANY_AIRCRAFT`].
    pub fn aircraft_label(&self) -> &str {
        self.aircraft.as_deref().unwrap_or(ANY_AIRCRAFT)
    }
}

// ---------------------------------------------------------------------------
// ResultEntry
// ---------------------------------------------------------------------------

/// A line in the result list.
///
/// Formats as `"<aircraft> | <route>"` or `"Consider FLxxx or FLyyy instead"`.
/// Selection handling works from that display text, not from the variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultEntry {
    /// An alternate route.
    Route(RouteOption),
    /// A pair of alternate levels.
    Levels(LevelSuggestion),
}

impl ResultEntry {
    /// Entry for a preset route that applies to any aircraft type.
    pub fn any_route(route: &str) -> Self {
        ResultEntry::Route(RouteOption::new(None, route))
    }
}

impl From<RouteOption> for ResultEntry {
    fn from(option: RouteOption) -> Self {
        ResultEntry::Route(option)
    }
}

impl From<LevelSuggestion> for ResultEntry {
    fn from(levels: LevelSuggestion) -> Self {
        ResultEntry::Levels(levels)
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultEntry::Route(option) => {
                write!(f, "{} | {}", option.aircraft_label(), option.route)
            }
            ResultEntry::Levels(levels) => levels.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::FlightLevel;
    use serde_json::json;

    #[test]
    fn mode_display_and_label() {
        assert_eq!(Mode::Route.to_string(), "route");
        assert_eq!(Mode::Altitude.to_string(), "altitude");
        assert_eq!(Mode::default(), Mode::Route);
        assert_eq!(Mode::Altitude.label(), "ALT");
    }

    #[test]
    fn route_option_from_value_with_aircraft() {
        let v = json!({ "acft": "B738", "route": "DOSEL Y59 RIVET" });
        let opt = RouteOption::from_value(0, &v).unwrap();
        assert_eq!(opt, RouteOption::new(Some("B738"), "DOSEL Y59 RIVET"));
    }

    #[test]
    fn route_option_missing_or_null_aircraft_is_any() {
        let missing = RouteOption::from_value(0, &json!({ "route": "WOL H65" })).unwrap();
        let null = RouteOption::from_value(0, &json!({ "acft": null, "route": "WOL H65" })).unwrap();
        assert_eq!(missing.aircraft_label(), "Any");
        assert_eq!(null.aircraft_label(), "Any");
    }

    #[test]
    fn route_option_rejects_bad_shapes() {
        assert!(matches!(
            RouteOption::from_value(3, &json!({ "acft": "A320" })),
            Err(ModelError::MalformedRouteOption { index: 3, .. })
        ));
        assert!(RouteOption::from_value(0, &json!({ "route": 12 })).is_err());
        assert!(RouteOption::from_value(0, &json!({ "acft": 1, "route": "X" })).is_err());
        assert!(RouteOption::from_value(0, &json!("DOSEL")).is_err());
    }

    #[test]
    fn route_option_deserializes_from_api_shape() {
        let opt: RouteOption = serde_json::from_str(r#"{"route":"DOSEL Y59 RIVET"}"#).unwrap();
        assert_eq!(opt.aircraft, None);
    }

    #[test]
    fn entry_display() {
        let route: ResultEntry = RouteOption::new(Some("B738"), "DOSEL Y59 RIVET").into();
        assert_eq!(route.to_string(), "B738 | DOSEL Y59 RIVET");

        let any = ResultEntry::any_route("WOL H65 LEECE Q29 ML");
        assert_eq!(any.to_string(), "Any | WOL H65 LEECE Q29 ML");

        let levels: ResultEntry = LevelSuggestion::around(FlightLevel::new(350)).into();
        assert_eq!(levels.to_string(), "Consider FL340 or FL360 instead");
    }
}
