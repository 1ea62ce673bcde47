use dioxus::prelude::*;
use lazyatc_models::RouteQuery;
use lazyatc_plugin::{surface, Host, MenuItem, Notifier, RequestWindow, UiTask, WindowSlot};
use lazyatc_sdk::RoutesClient;

// ── Host adapter ──────────────────────────────────────────────────────

/// The shell's side of the plugin contract, backed by app-level signals.
///
/// Event handlers already run on the UI thread, so dispatched tasks run
/// immediately.
#[derive(Clone, Copy)]
pub struct ShellHost {
    menu: Signal<Vec<MenuItem>>,
    slot: Signal<WindowSlot<RequestWindow>>,
}

impl ShellHost {
    pub fn new(menu: Signal<Vec<MenuItem>>, slot: Signal<WindowSlot<RequestWindow>>) -> Self {
        Self { menu, slot }
    }
}

impl Host for ShellHost {
    fn add_menu_item(&mut self, item: MenuItem) {
        self.menu.write().push(item);
    }

    fn invoke_on_ui(&mut self, task: UiTask) {
        let mut slot = self.slot.write();
        task(&mut *slot);
    }
}

// ── Notifications ─────────────────────────────────────────────────────

/// Shows messages in the modal notice dialog.
#[derive(Clone, Copy)]
pub struct DialogNotifier(pub Signal<Option<String>>);

impl Notifier for DialogNotifier {
    fn notify(&mut self, message: &str) {
        self.0.set(Some(message.to_string()));
    }
}

/// Notices raised before the UI exists, shown once it starts.
#[derive(Debug, Clone, Default)]
pub struct PendingNotice(pub Option<String>);

impl Notifier for PendingNotice {
    fn notify(&mut self, message: &str) {
        self.0 = Some(message.to_string());
    }
}

// ── Route fetches ─────────────────────────────────────────────────────

/// Query the routes API and append the answer to the window.
///
/// A hidden window still receives its results. A disposed one does not.
pub async fn run_route_fetch(
    client: RoutesClient,
    query: RouteQuery,
    mut slot: Signal<WindowSlot<RequestWindow>>,
    notice: Signal<Option<String>>,
) {
    let outcome = client.fetch_routes(&query).await;
    let result = slot
        .write()
        .window_mut()
        .map(|w| w.complete_route_fetch(outcome));
    if let Some(result) = result {
        surface(result, &mut DialogNotifier(notice));
    }
}
