//! Error types for the plugin crate.
//!
//! [`FetchError`] renders as the notification shown to the controller, so
//! its `Display` text is user-facing.

use std::path::PathBuf;

use lazyatc_models::ModelError;
use lazyatc_sdk::SdkError;

/// Why a fetch produced no (or only partial) results.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// An airport code was not 4 characters.
    #[error("Please enter valid ICAO codes.")]
    InvalidIcaoCodes(#[source] ModelError),

    /// The altitude field was not a whole number.
    #[error("Please enter a valid flight level.")]
    InvalidFlightLevel(#[source] ModelError),

    /// The API answered with an empty `routes` array.
    #[error("No valid routes found.")]
    NoRoutes,

    /// The API answer had no `routes` key.
    #[error("Unexpected response format.")]
    UnexpectedFormat,

    /// The request itself failed.
    #[error("Error fetching data:\n{0}")]
    Request(#[from] SdkError),

    /// An element of `routes` could not be read.
    #[error("Error fetching data:\n{0}")]
    MalformedRoute(#[source] ModelError),
}

/// Failure writing to the clipboard.
#[derive(Debug, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Failure loading or saving phraseology settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No per-user configuration directory on this platform.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The settings file is not valid JSON.
    #[error("could not parse {path}: {source}")]
    Parse {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_match_window_text() {
        let bad = ModelError::InvalidICAOCode {
            value: "YSS".into(),
            reason: "must be exactly 4 characters".into(),
        };
        assert_eq!(
            FetchError::InvalidIcaoCodes(bad).to_string(),
            "Please enter valid ICAO codes."
        );
        assert_eq!(FetchError::NoRoutes.to_string(), "No valid routes found.");
        assert_eq!(
            FetchError::UnexpectedFormat.to_string(),
            "Unexpected response format."
        );
    }

    #[test]
    fn request_error_carries_detail() {
        let err = FetchError::from(SdkError::Config("bad url".into()));
        assert_eq!(
            err.to_string(),
            "Error fetching data:\nconfiguration error: bad url"
        );
    }
}
