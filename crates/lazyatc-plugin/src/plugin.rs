//! Plugin entry point: one menu command that opens the request window.

use lazyatc_models::PhraseologyTemplates;
use tracing::info;

use crate::host::{Host, MenuCategory, MenuCommand, MenuItem, MenuWindowType, Plugin};
use crate::request_window::RequestWindow;
use crate::window_slot::{ShowOutcome, WindowSlot};

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "LazyATC";

/// Command delivered when the LazyATC menu item is clicked.
pub const OPEN_WINDOW: MenuCommand = MenuCommand("lazyatc.open");

/// The LazyATC plugin.
///
/// Stateless apart from the templates new windows start with; the window
/// itself lives in the host's [`WindowSlot`].
#[derive(Debug, Clone, Default)]
pub struct LazyAtcPlugin {
    templates: PhraseologyTemplates,
    registered: bool,
}

impl LazyAtcPlugin {
    /// A plugin whose windows start with `templates`.
    pub fn new(templates: PhraseologyTemplates) -> Self {
        Self {
            templates,
            registered: false,
        }
    }

    /// The menu item this plugin adds to the host.
    pub fn menu_item() -> MenuItem {
        MenuItem {
            label: PLUGIN_NAME.to_string(),
            window: MenuWindowType::Main,
            category: MenuCategory::Tools,
            command: OPEN_WINDOW,
        }
    }

    /// Replace the templates handed to windows created from now on.
    pub fn set_templates(&mut self, templates: PhraseologyTemplates) {
        self.templates = templates;
    }
}

/// Show the request window, creating it with `templates` if none is open.
pub fn show_window(
    slot: &mut WindowSlot<RequestWindow>,
    templates: PhraseologyTemplates,
) -> ShowOutcome {
    let outcome = slot.show_or_create(move || RequestWindow::new(templates));
    info!(?outcome, "request window shown");
    outcome
}

impl Plugin for LazyAtcPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn on_load(&mut self, host: &mut dyn Host) {
        if self.registered {
            return;
        }
        host.add_menu_item(Self::menu_item());
        self.registered = true;
        info!(plugin = PLUGIN_NAME, "menu item registered");
    }

    fn on_menu_command(&mut self, command: MenuCommand, host: &mut dyn Host) {
        if command != OPEN_WINDOW {
            return;
        }
        let templates = self.templates.clone();
        host.invoke_on_ui(Box::new(move |slot| {
            show_window(slot, templates);
        }));
    }
}
