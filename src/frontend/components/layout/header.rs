use dioxus::prelude::*;

#[component]
pub fn Header(
    page_title: String,
    is_collapsed: bool,
    on_toggle_mobile: EventHandler,
    on_toggle_collapse: EventHandler,
) -> Element {
    rsx! {
        header { class: "navbar",
            div { class: "navbar-start",
                button {
                    class: "btn btn-ghost",
                    aria_label: "Open sidebar",
                    onclick: move |_| on_toggle_mobile.call(()),
                    "☰"
                }
                if is_collapsed {
                    button {
                        class: "btn btn-ghost",
                        aria_label: "Show sidebar",
                        onclick: move |_| on_toggle_collapse.call(()),
                        "»"
                    }
                }
                h1 { class: "page-title", "{page_title}" }
            }
        }
    }
}
