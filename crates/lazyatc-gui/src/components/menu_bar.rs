use dioxus::prelude::*;
use lazyatc_plugin::{MenuCategory, MenuCommand, MenuItem};

/// Host menu bar. Plugin items are grouped under their category.
#[component]
pub fn MenuBar(items: Vec<MenuItem>, on_command: EventHandler<MenuCommand>) -> Element {
    let mut open: Signal<Option<MenuCategory>> = use_signal(|| None);

    // Categories in order of first registration.
    let mut categories: Vec<MenuCategory> = Vec::new();
    for item in &items {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }

    rsx! {
        div { class: "menu-bar",
            for category in categories {
                div { class: "menu",
                    button {
                        class: if *open.read() == Some(category) { "menu-title open" } else { "menu-title" },
                        onclick: move |_| {
                            let next = if *open.read() == Some(category) { None } else { Some(category) };
                            open.set(next);
                        },
                        "{category.title()}"
                    }
                    if *open.read() == Some(category) {
                        div { class: "menu-dropdown",
                            for item in items.iter().filter(|i| i.category == category) {
                                {
                                    let command = item.command;
                                    rsx! {
                                        button {
                                            class: "menu-item",
                                            onclick: move |_| {
                                                open.set(None);
                                                on_command.call(command);
                                            },
                                            "{item.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
