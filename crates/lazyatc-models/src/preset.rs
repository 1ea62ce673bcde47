//! Built-in route presets for frequently worked city pairs.

use crate::entry::ResultEntry;
use crate::error::ModelError;
use crate::level::LevelSuggestion;

/// A canned city pair with a known-good route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Button label, e.g. `"SY-ML"`.
    pub label: &'static str,
    /// Departure ICAO code.
    pub departure: &'static str,
    /// Destination ICAO code.
    pub destination: &'static str,
    /// Route text offered for any aircraft type.
    pub route: &'static str,
    /// Whether the direction of flight uses even flight levels.
    pub even_levels: bool,
}

/// Sydney to Melbourne.
pub const SY_ML: Preset = Preset {
    label: "SY-ML",
    departure: "YSSY",
    destination: "YMML",
    route: "WOL H65 LEECE Q29 ML",
    even_levels: true,
};

/// Melbourne to Sydney.
pub const ML_SY: Preset = Preset {
    label: "ML-SY",
    departure: "YMML",
    destination: "YSSY",
    route: "DOSEL Y59 RIVET",
    even_levels: false,
};

/// Presets in the order their buttons appear.
pub static BUILTIN_PRESETS: [Preset; 2] = [SY_ML, ML_SY];

impl Preset {
    /// Look up a built-in preset by label (case-insensitive).
    pub fn find(label: &str) -> Result<&'static Preset, ModelError> {
        BUILTIN_PRESETS
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| ModelError::UnknownPreset {
                label: label.to_string(),
            })
    }

    /// The two result entries a preset fills the list with: the route, then
    /// the level pair for its direction of flight.
    pub fn entries(&self) -> [ResultEntry; 2] {
        [
            ResultEntry::any_route(self.route),
            LevelSuggestion::for_parity(self.even_levels).into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sy_ml_entries() {
        let [route, levels] = SY_ML.entries();
        assert_eq!(route.to_string(), "Any | WOL H65 LEECE Q29 ML");
        assert_eq!(levels.to_string(), "Consider FL300 or FL320 instead");
    }

    #[test]
    fn ml_sy_entries() {
        let [route, levels] = ML_SY.entries();
        assert_eq!(route.to_string(), "Any | DOSEL Y59 RIVET");
        assert_eq!(levels.to_string(), "Consider FL310 or FL330 instead");
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(Preset::find("sy-ml").unwrap().departure, "YSSY");
        assert_eq!(Preset::find(" ML-SY ").unwrap().destination, "YSSY");
        assert!(Preset::find("BN-CS").is_err());
    }
}
