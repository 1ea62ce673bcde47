//! The LazyATC request window.
//!
//! Holds the form, the result list and the selection, and implements every
//! action the window offers: toggling the mode, applying a preset, fetching
//! suggestions and copying phraseology for the selected line.
//!
//! Fetching is split in two so a UI never holds the window borrowed across
//! the network call:
//!
//! 1. [`RequestWindow::begin_fetch`] clears the list and validates the form.
//!    Altitude requests complete here.
//! 2. [`RequestWindow::complete_route_fetch`] appends the API answer.
//!
//! [`RequestWindow::fetch`] runs both steps for callers that can await in
//! place.

use lazyatc_models::{
    FlightLevel, LevelSuggestion, Mode, PhraseologyTemplates, Preset, ResultEntry, RouteOption,
    RouteQuery,
};
use lazyatc_sdk::{RoutesPayload, SdkError};
use tracing::{debug, info};

use crate::error::{ClipboardError, FetchError};
use crate::output::Clipboard;
use crate::route_source::RouteSource;

/// Which input fields are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    /// Departure and destination fields.
    pub airports: bool,
    /// Requested altitude field.
    pub altitude: bool,
}

/// What is left to do after [`RequestWindow::begin_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Results are already in the list.
    Done,
    /// Issue this query and hand the answer to
    /// [`RequestWindow::complete_route_fetch`].
    Route(RouteQuery),
}

/// State of one request window.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestWindow {
    /// Active mode.
    pub mode: Mode,
    /// Departure field, as typed.
    pub departure: String,
    /// Destination field, as typed.
    pub destination: String,
    /// Requested altitude field, as typed.
    pub altitude: String,
    /// Result list, in display order.
    pub results: Vec<ResultEntry>,
    /// Index into `results` of the highlighted line.
    pub selected: Option<usize>,
    /// Wording used when copying a selection.
    pub templates: PhraseologyTemplates,
}

impl Default for RequestWindow {
    fn default() -> Self {
        Self::new(PhraseologyTemplates::default())
    }
}

impl RequestWindow {
    /// A fresh window in route mode with empty fields.
    pub fn new(templates: PhraseologyTemplates) -> Self {
        Self {
            mode: Mode::Route,
            departure: String::new(),
            destination: String::new(),
            altitude: String::new(),
            results: Vec::new(),
            selected: None,
            templates,
        }
    }

    // ------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------

    /// Switch mode. Field contents and results are kept.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "mode changed");
            self.mode = mode;
        }
    }

    /// Which fields the current mode shows.
    pub fn fields_visible(&self) -> FieldVisibility {
        let route = self.mode == Mode::Route;
        FieldVisibility {
            airports: route,
            altitude: !route,
        }
    }

    /// Fill the form and the list from a canned city pair.
    pub fn apply_preset(&mut self, preset: &Preset) {
        info!(preset = preset.label, "applying preset");
        self.set_mode(Mode::Route);
        self.departure = preset.departure.to_string();
        self.destination = preset.destination.to_string();
        self.clear_results();
        self.results.extend(preset.entries());
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.selected = None;
    }

    // ------------------------------------------------------------------
    // Fetch
    // ------------------------------------------------------------------

    /// Clear the list and validate the form for the current mode.
    ///
    /// In altitude mode the suggestion is computed and appended right away.
    /// On error nothing is requested and the list stays empty.
    pub fn begin_fetch(&mut self) -> Result<FetchPlan, FetchError> {
        self.clear_results();

        match self.mode {
            Mode::Route => {
                let query = RouteQuery::from_input(&self.departure, &self.destination)
                    .map_err(FetchError::InvalidIcaoCodes)?;
                Ok(FetchPlan::Route(query))
            }
            Mode::Altitude => {
                let filed = FlightLevel::parse_input(&self.altitude)
                    .map_err(FetchError::InvalidFlightLevel)?;
                self.results.push(LevelSuggestion::around(filed).into());
                Ok(FetchPlan::Done)
            }
        }
    }

    /// Append the routes API answer to the list.
    ///
    /// Returns how many entries were added. Elements are appended in
    /// response order until one cannot be read; entries added before the
    /// failure stay in the list.
    pub fn complete_route_fetch(
        &mut self,
        outcome: Result<RoutesPayload, SdkError>,
    ) -> Result<usize, FetchError> {
        let routes = outcome?.routes.ok_or(FetchError::UnexpectedFormat)?;

        let mut added = 0;
        for (index, value) in routes.iter().enumerate() {
            let option = RouteOption::from_value(index, value).map_err(FetchError::MalformedRoute)?;
            self.results.push(option.into());
            added += 1;
        }

        if self.results.is_empty() {
            return Err(FetchError::NoRoutes);
        }
        debug!(added, "route results appended");
        Ok(added)
    }

    /// Validate, query `source` if needed, and fill the list.
    ///
    /// Returns the number of entries added.
    pub async fn fetch(&mut self, source: &impl RouteSource) -> Result<usize, FetchError> {
        match self.begin_fetch()? {
            FetchPlan::Done => Ok(self.results.len()),
            FetchPlan::Route(query) => {
                let outcome = source.fetch_routes(&query).await;
                self.complete_route_fetch(outcome)
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Select the entry at `index`, or clear the selection with `None`.
    ///
    /// Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.results.len());
    }

    /// The selected entry, if any.
    pub fn selected_entry(&self) -> Option<&ResultEntry> {
        self.selected.and_then(|i| self.results.get(i))
    }

    /// Phraseology for the selected entry, interpreted per the current mode.
    pub fn selection_message(&self) -> Option<String> {
        let entry = self.selected_entry()?;
        self.templates.message_for(self.mode, &entry.to_string())
    }

    /// Put the phraseology for the selected entry on `clipboard`.
    ///
    /// Returns the copied message, or `None` when nothing is selected or the
    /// entry yields no message.
    pub fn copy_selection(
        &self,
        clipboard: &mut dyn Clipboard,
    ) -> Result<Option<String>, ClipboardError> {
        let Some(message) = self.selection_message() else {
            return Ok(None);
        };
        clipboard.set_text(&message)?;
        info!(mode = %self.mode, "phraseology copied");
        Ok(Some(message))
    }
}
