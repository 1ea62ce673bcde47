mod components;
mod state;

use dioxus::prelude::*;
use lazyatc_models::{PhraseologyTemplates, RouteQuery};
use lazyatc_plugin::{settings, LazyAtcPlugin, MenuCommand, MenuItem, Plugin, RequestWindow, WindowSlot};
use lazyatc_sdk::{ApiConfig, RoutesClient};
use tracing::info;

use components::menu_bar::MenuBar;
use components::notice::NoticeDialog;
use components::request_window::RequestWindowView;
use state::{run_route_fetch, PendingNotice, ShellHost};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = RoutesClient::new(ApiConfig::from_env())?;
    let mut startup_notice = PendingNotice::default();
    let templates = settings::load_templates(&mut startup_notice);
    info!(url = %client.routes_url(), "starting LazyATC host");

    dioxus::LaunchBuilder::new()
        .with_context(client)
        .with_context(templates)
        .with_context(startup_notice)
        .launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    let mut plugin = use_signal(|| LazyAtcPlugin::new(consume_context::<PhraseologyTemplates>()));
    let menu = use_signal(Vec::<MenuItem>::new);
    let slot = use_signal(WindowSlot::<RequestWindow>::default);
    let notice = use_signal(|| consume_context::<PendingNotice>().0);
    let client = use_signal(consume_context::<RoutesClient>);
    let mut fetch_queue = use_signal(Vec::<RouteQuery>::new);

    // Plugin activation. `on_load` registers its menu item once.
    use_effect(move || {
        let mut host = ShellHost::new(menu, slot);
        plugin.write().on_load(&mut host);
    });

    // Route fetches run at the App level so hiding the window does not
    // cancel them.
    use_effect(move || {
        if fetch_queue.read().is_empty() {
            return;
        }
        let queries = std::mem::take(&mut *fetch_queue.write());
        for query in queries {
            let client = client.read().clone();
            spawn(run_route_fetch(client, query, slot, notice));
        }
    });

    rsx! {
        style { {include_str!("style.css")} }
        div { class: "app-root",
            MenuBar {
                items: menu.read().clone(),
                on_command: move |command: MenuCommand| {
                    let mut host = ShellHost::new(menu, slot);
                    plugin.write().on_menu_command(command, &mut host);
                },
            }

            div { class: "scope",
                p { class: "scope-hint", "Open Tools → LazyATC to request alternate routes or levels." }
            }

            if slot.read().is_visible() {
                RequestWindowView { slot, fetch_queue, notice, plugin }
            }

            NoticeDialog { notice }
        }
    }
}
