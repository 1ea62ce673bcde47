use dioxus::prelude::*;

/// Modal message box. Blocks the window until acknowledged.
#[component]
pub fn NoticeDialog(notice: Signal<Option<String>>) -> Element {
    let mut notice = notice;
    let Some(message) = notice.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div { class: "notice-backdrop",
            div { class: "notice",
                pre { class: "notice-text", "{message}" }
                button {
                    class: "notice-ok",
                    autofocus: true,
                    onclick: move |_| notice.set(None),
                    "OK"
                }
            }
        }
    }
}
