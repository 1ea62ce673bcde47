//! # LazyATC plugin
//!
//! Everything between the host application and the routes API:
//!
//! * [`Host`] / [`Plugin`]: the capability set a host offers and the hooks
//!   a plugin implements.
//! * [`LazyAtcPlugin`]: registers the `LazyATC` menu command and opens the
//!   request window on click.
//! * [`WindowSlot`]: create/show/close lifecycle of that single window.
//! * [`RequestWindow`]: form, results, presets, fetch and copy actions.
//! * [`settings`]: persisted phraseology templates.

pub mod error;
pub mod host;
pub mod output;
pub mod plugin;
pub mod request_window;
pub mod route_source;
pub mod settings;
pub mod window_slot;

pub use error::{ClipboardError, FetchError, SettingsError};
pub use host::{
    FlightDataRecord, Host, MenuCategory, MenuCommand, MenuItem, MenuWindowType, Plugin,
    RadarTrack, UiTask,
};
pub use output::{surface, Clipboard, Notifier, SystemClipboard};
pub use plugin::{show_window, LazyAtcPlugin, OPEN_WINDOW, PLUGIN_NAME};
pub use request_window::{FetchPlan, FieldVisibility, RequestWindow};
pub use route_source::RouteSource;
pub use window_slot::{ShowOutcome, WindowSlot};
