use crate::backend::utils::config::AppConfig;
use crate::backend::utils::css_loader::CssLoader;
use crate::backend::utils::route::Route;
use crate::frontend::components::layout::{Header, Sidebar};
use crate::frontend::services::guard::page_title;
use dioxus::prelude::*;
use dioxus_router::use_route;

/// Shell for signed-in users: sidebar with session-aware links plus a header
/// carrying the page title and the drawer toggles.
#[component]
pub fn MainLayout(children: Element) -> Element {
    let config = use_context::<AppConfig>();
    let route = use_route::<Route>();
    let mut mobile_open = use_signal(|| false);
    let mut collapsed = use_signal(|| config.ui.sidebar_collapsed);

    let title = page_title(&route.to_string());

    let drawer_class = {
        let mut classes = vec!["drawer"];
        if !collapsed() {
            classes.push("drawer-open");
        }
        if mobile_open() {
            classes.push("drawer-mobile-open");
        }
        classes.join(" ")
    };

    rsx! {
        style {
            dangerous_inner_html: CssLoader::get_main()
        }

        div { class: "{drawer_class}",
            if !collapsed() {
                Sidebar {
                    on_close_mobile: move |_| mobile_open.set(false),
                    on_collapse: move |_| collapsed.set(true),
                }
            }

            if mobile_open() {
                div {
                    class: "drawer-overlay",
                    onclick: move |_| mobile_open.set(false),
                }
            }

            div { class: "drawer-content",
                Header {
                    page_title: title.to_string(),
                    is_collapsed: collapsed(),
                    on_toggle_mobile: move |_| mobile_open.set(!mobile_open()),
                    on_toggle_collapse: move |_| collapsed.set(!collapsed()),
                }

                main { class: "content",
                    {children}
                }
            }
        }
    }
}
