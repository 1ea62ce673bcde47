use dioxus::prelude::*;
use lazyatc_models::PhraseologyTemplates;
use lazyatc_plugin::{settings, LazyAtcPlugin, Notifier, RequestWindow, WindowSlot};
use tracing::error;

use crate::state::DialogNotifier;

/// Editor for the two phraseology templates.
///
/// Saving writes `settings.json` and pushes the new wording to both the open
/// window and the plugin, so the next window created picks it up too.
#[component]
pub fn SettingsPanel(
    slot: Signal<WindowSlot<RequestWindow>>,
    plugin: Signal<LazyAtcPlugin>,
    notice: Signal<Option<String>>,
    on_close: EventHandler<()>,
) -> Element {
    let mut slot = slot;
    let mut plugin = plugin;
    let initial = slot
        .read()
        .window()
        .map(|w| w.templates.clone())
        .unwrap_or_default();
    let mut invalid_route = use_signal(|| initial.invalid_route.clone());
    let mut non_standard_level = use_signal(|| initial.non_standard_level.clone());

    let save = move |_: MouseEvent| {
        let templates = PhraseologyTemplates {
            invalid_route: invalid_route.read().clone(),
            non_standard_level: non_standard_level.read().clone(),
        };
        match settings::save_templates(&templates) {
            Ok(_) => {
                if let Some(w) = slot.write().window_mut() {
                    w.templates = templates.clone();
                }
                plugin.write().set_templates(templates);
                on_close.call(());
            }
            Err(e) => {
                error!(error = %e, "failed to save settings");
                DialogNotifier(notice).notify(&format!("Could not save settings:\n{e}"));
            }
        }
    };

    let reset = move |_: MouseEvent| {
        let defaults = PhraseologyTemplates::default();
        invalid_route.set(defaults.invalid_route);
        non_standard_level.set(defaults.non_standard_level);
    };

    rsx! {
        div { class: "settings-panel",
            h3 { "Phraseology" }
            p { class: "settings-hint",
                "Placeholders: {{route}} in the route message, {{fl1}} and {{fl2}} in the level message."
            }
            div { class: "field",
                label { "Invalid Route" }
                textarea {
                    rows: "3",
                    value: "{invalid_route}",
                    oninput: move |evt: Event<FormData>| invalid_route.set(evt.value()),
                }
            }
            div { class: "field",
                label { "Non-Standard Altitude" }
                textarea {
                    rows: "3",
                    value: "{non_standard_level}",
                    oninput: move |evt: Event<FormData>| non_standard_level.set(evt.value()),
                }
            }
            div { class: "action-row",
                button { class: "fetch-btn", onclick: save, "Save" }
                button { class: "preset-btn", onclick: reset, "Reset defaults" }
                button { class: "preset-btn", onclick: move |_| on_close.call(()), "Cancel" }
            }
        }
    }
}
