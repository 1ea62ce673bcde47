use dioxus::prelude::*;
use lazyatc_models::{Mode, RouteQuery, BUILTIN_PRESETS};
use lazyatc_plugin::{
    surface, FetchPlan, LazyAtcPlugin, Notifier, RequestWindow, SystemClipboard, WindowSlot,
};

use crate::components::settings_panel::SettingsPanel;
use crate::state::DialogNotifier;

/// The LazyATC request window.
#[component]
pub fn RequestWindowView(
    slot: Signal<WindowSlot<RequestWindow>>,
    fetch_queue: Signal<Vec<RouteQuery>>,
    notice: Signal<Option<String>>,
    plugin: Signal<LazyAtcPlugin>,
) -> Element {
    let mut slot = slot;
    let mut fetch_queue = fetch_queue;
    let mut show_settings = use_signal(|| false);

    let Some(window) = slot.read().window().cloned() else {
        return rsx! {};
    };
    let fields = window.fields_visible();
    let lines: Vec<String> = window.results.iter().map(ToString::to_string).collect();
    let selected = window.selected;

    // Button and Enter key share this path. Route requests are queued for
    // the app to run so they outlive this view being hidden.
    let mut run_fetch = move || {
        let plan = slot.write().window_mut().map(RequestWindow::begin_fetch);
        match plan {
            Some(Ok(FetchPlan::Route(query))) => fetch_queue.write().push(query),
            Some(Err(e)) => {
                surface::<()>(Err(e), &mut DialogNotifier(notice));
            }
            Some(Ok(FetchPlan::Done)) | None => {}
        }
    };

    let copy_selected = move || {
        let copied = slot
            .read()
            .window()
            .map(|w| w.copy_selection(&mut SystemClipboard));
        if let Some(Err(e)) = copied {
            DialogNotifier(notice).notify(&e.to_string());
        }
    };

    let mut select = move |index: Option<usize>| {
        if let Some(w) = slot.write().window_mut() {
            w.select(index);
        }
    };

    let mut set_mode = move |mode: Mode| {
        if let Some(w) = slot.write().window_mut() {
            w.set_mode(mode);
        }
    };

    let on_field_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            evt.prevent_default();
            run_fetch();
        }
    };

    let result_count = lines.len();

    rsx! {
        div { class: "lazyatc-window",
            div { class: "window-titlebar",
                span { class: "window-title", "LazyATC" }
                button {
                    class: "window-settings",
                    title: "Phraseology settings",
                    onclick: move |_| {
                        let next = !*show_settings.read();
                        show_settings.set(next);
                    },
                    "⚙"
                }
                button {
                    class: "window-settings",
                    title: "Hide",
                    onclick: move |_| {
                        slot.write().hide();
                    },
                    "–"
                }
                button {
                    class: "window-close",
                    onclick: move |_| {
                        slot.write().dispose();
                    },
                    "×"
                }
            }

            div { class: "mode-row",
                for mode in [Mode::Route, Mode::Altitude] {
                    label {
                        input {
                            r#type: "radio",
                            name: "lazyatc_mode",
                            checked: window.mode == mode,
                            oninput: move |_| set_mode(mode),
                        }
                        " {mode.label()}"
                    }
                }
            }

            if fields.airports {
                div { class: "form-row airports",
                    div { class: "field",
                        label { "Departure ICAO:" }
                        input {
                            r#type: "text",
                            value: "{window.departure}",
                            oninput: move |evt: Event<FormData>| {
                                if let Some(w) = slot.write().window_mut() {
                                    w.departure = evt.value();
                                }
                            },
                            onkeydown: on_field_key,
                        }
                    }
                    div { class: "field",
                        label { "Destination ICAO:" }
                        input {
                            r#type: "text",
                            value: "{window.destination}",
                            oninput: move |evt: Event<FormData>| {
                                if let Some(w) = slot.write().window_mut() {
                                    w.destination = evt.value();
                                }
                            },
                            onkeydown: on_field_key,
                        }
                    }
                }
            }

            if fields.altitude {
                div { class: "form-row altitude",
                    div { class: "field",
                        label { "Requested Altitude:" }
                        input {
                            r#type: "text",
                            value: "{window.altitude}",
                            oninput: move |evt: Event<FormData>| {
                                if let Some(w) = slot.write().window_mut() {
                                    w.altitude = evt.value();
                                }
                            },
                            onkeydown: on_field_key,
                        }
                    }
                }
            }

            div { class: "action-row",
                button {
                    class: "fetch-btn",
                    onclick: move |_| run_fetch(),
                    "Get Valid Options"
                }
                for preset in BUILTIN_PRESETS.iter() {
                    button {
                        class: "preset-btn",
                        onclick: move |_| {
                            if let Some(w) = slot.write().window_mut() {
                                w.apply_preset(preset);
                            }
                        },
                        "{preset.label}"
                    }
                }
            }

            div {
                class: "results",
                tabindex: "0",
                onkeydown: move |evt: KeyboardEvent| {
                    match evt.key() {
                        Key::Enter => {
                            evt.prevent_default();
                            copy_selected();
                        }
                        Key::ArrowDown if result_count > 0 => {
                            evt.prevent_default();
                            select(Some(selected.map_or(0, |i| (i + 1).min(result_count - 1))));
                        }
                        Key::ArrowUp if result_count > 0 => {
                            evt.prevent_default();
                            select(Some(selected.map_or(0, |i| i.saturating_sub(1))));
                        }
                        _ => {}
                    }
                },
                for (idx, line) in lines.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: if selected == Some(idx) { "result-item selected" } else { "result-item" },
                        onclick: move |_| select(Some(idx)),
                        ondoubleclick: move |_| {
                            select(Some(idx));
                            copy_selected();
                        },
                        "{line}"
                    }
                }
            }

            if *show_settings.read() {
                SettingsPanel {
                    slot,
                    plugin,
                    notice,
                    on_close: move |_| show_settings.set(false),
                }
            }
        }
    }
}
