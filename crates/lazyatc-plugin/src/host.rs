//! The capability set a host application offers to plugins, and the hooks a
//! plugin exposes back.
//!
//! A host owns the UI event loop. It lets plugins add menu commands and run
//! work on its UI thread, and it forwards flight-data and radar-track
//! updates that a plugin may ignore.

use crate::request_window::RequestWindow;
use crate::window_slot::WindowSlot;

/// Which host window a menu item is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuWindowType {
    /// The main client window.
    Main,
}

/// Top-level menu a command is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    /// The `Tools` menu.
    Tools,
}

impl MenuCategory {
    /// Menu title as displayed by the host.
    pub fn title(self) -> &'static str {
        match self {
            MenuCategory::Tools => "Tools",
        }
    }
}

/// Identifier a host hands back when a menu item is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuCommand(pub &'static str);

/// A command a plugin registers with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown in the menu.
    pub label: String,
    /// Window the item is attached to.
    pub window: MenuWindowType,
    /// Menu the item is filed under.
    pub category: MenuCategory,
    /// Command delivered on click.
    pub command: MenuCommand,
}

/// Work to run on the host UI thread against the plugin's window slot.
pub type UiTask = Box<dyn FnOnce(&mut WindowSlot<RequestWindow>) + Send + 'static>;

/// What a host provides to a plugin.
pub trait Host {
    /// Add a command to one of the host's menus.
    fn add_menu_item(&mut self, item: MenuItem);

    /// Run `task` on the UI thread, where the window slot lives.
    fn invoke_on_ui(&mut self, task: UiTask);
}

/// A flight data record update pushed by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightDataRecord {
    /// Aircraft callsign.
    pub callsign: String,
    /// Filed departure, if known.
    pub departure: Option<String>,
    /// Filed destination, if known.
    pub destination: Option<String>,
    /// Filed route text.
    pub route: String,
    /// Requested flight level, if known.
    pub requested_level: Option<i32>,
}

/// A radar track update pushed by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarTrack {
    /// Callsign of the correlated flight, if any.
    pub callsign: Option<String>,
    /// Current pressure altitude in feet.
    pub altitude_ft: i32,
}

/// Hooks a plugin implements. Everything but [`name`](Self::name) defaults
/// to doing nothing.
pub trait Plugin {
    /// Display name of the plugin.
    fn name(&self) -> &str;

    /// Called once when the host loads the plugin.
    fn on_load(&mut self, _host: &mut dyn Host) {}

    /// Called when the host unloads the plugin.
    fn on_unload(&mut self) {}

    /// Called when one of this plugin's menu items is clicked.
    fn on_menu_command(&mut self, _command: MenuCommand, _host: &mut dyn Host) {}

    /// Called when a flight data record changes.
    fn on_fdr_update(&mut self, _updated: &FlightDataRecord) {}

    /// Called when a radar track changes.
    fn on_radar_track_update(&mut self, _updated: &RadarTrack) {}
}
