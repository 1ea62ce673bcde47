//! Phraseology templates and the text extraction that feeds them.
//!
//! A selected result line is turned into a message the controller can paste
//! to the pilot. In [`Mode::Route`] the route text after the `|` delimiter is
//! used; in [`Mode::Altitude`] the two level tokens following `FL` are used.
//!
//! Templates use the placeholders `{route}`, `{fl1}` and `{fl2}`.

use serde::{Deserialize, Serialize};

use crate::entry::Mode;

/// Placeholder replaced with the route text.
pub const ROUTE_PLACEHOLDER: &str = "{route}";
/// Placeholder replaced with the first offered level.
pub const FL1_PLACEHOLDER: &str = "{fl1}";
/// Placeholder replaced with the second offered level.
pub const FL2_PLACEHOLDER: &str = "{fl2}";

const DEFAULT_INVALID_ROUTE: &str =
    "Unfortunately your filed route is invalid. Are you able to accept {route}?";
const DEFAULT_NON_STANDARD_LEVEL: &str =
    "Unfortunately your filed flight level is invalid. Of {fl1} and {fl2}, which would you prefer?";

/// The two message templates, one per [`Mode`].
///
/// Missing keys in a settings file fall back to the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PhraseologyTemplates {
    /// Template for an amended route, containing `{route}`.
    #[serde(rename = "Invalid Route")]
    pub invalid_route: String,
    /// Template for alternate levels, containing `{fl1}` and `{fl2}`.
    #[serde(rename = "Non-Standard Altitude")]
    pub non_standard_level: String,
}

impl Default for PhraseologyTemplates {
    fn default() -> Self {
        Self {
            invalid_route: DEFAULT_INVALID_ROUTE.to_string(),
            non_standard_level: DEFAULT_NON_STANDARD_LEVEL.to_string(),
        }
    }
}

impl PhraseologyTemplates {
    /// Fill the route template.
    pub fn render_route(&self, route: &str) -> String {
        self.invalid_route.replace(ROUTE_PLACEHOLDER, route)
    }

    /// Fill the level template.
    pub fn render_levels(&self, fl1: &str, fl2: &str) -> String {
        self.non_standard_level
            .replace(FL1_PLACEHOLDER, fl1)
            .replace(FL2_PLACEHOLDER, fl2)
    }

    /// Build the message for a selected result line, interpreted per `mode`.
    ///
    /// Returns `None` when an altitude line does not carry two level tokens.
    pub fn message_for(&self, mode: Mode, entry_text: &str) -> Option<String> {
        match mode {
            Mode::Route => Some(self.render_route(route_from_entry(entry_text))),
            Mode::Altitude => {
                let (fl1, fl2) = levels_from_entry(entry_text)?;
                Some(self.render_levels(fl1, fl2))
            }
        }
    }
}

/// Route text of a result line: everything after the first `|`, or the
/// whole line when there is none. Surrounding whitespace is dropped.
pub fn route_from_entry(entry_text: &str) -> &str {
    match entry_text.split_once('|') {
        Some((_, route)) => route.trim(),
        None => entry_text.trim(),
    }
}

/// The three-character tokens after the first two `FL` markers of a line.
///
/// `"Consider FL340 or FL360 instead"` yields `("340", "360")`. Fewer than
/// two markers, or fewer than three characters after one, yields `None`.
pub fn levels_from_entry(entry_text: &str) -> Option<(&str, &str)> {
    let mut markers = entry_text.match_indices("FL").map(|(idx, marker)| idx + marker.len());
    let first = level_token(&entry_text[markers.next()?..])?;
    let second = level_token(&entry_text[markers.next()?..])?;
    Some((first, second))
}

fn level_token(after_marker: &str) -> Option<&str> {
    let rest = after_marker.trim_start();
    let end = match rest.char_indices().nth(3) {
        Some((idx, _)) => idx,
        None if rest.chars().count() == 3 => rest.len(),
        None => return None,
    };
    Some(&rest[..end])
}
