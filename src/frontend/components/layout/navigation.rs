use crate::backend::api::SessionClient;
use crate::backend::api::session::{ADMIN_PATH, LOGIN_PATH};
use crate::backend::utils::route::Route;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::nav_items;
use crate::frontend::services::navigation::Navigator;
use dioxus::prelude::*;
use dioxus_router::components::Link;
use dioxus_router::use_route;
use tracing::error;

/// Sidebar of the signed-in shell.
#[component]
pub fn Sidebar(on_close_mobile: EventHandler, on_collapse: EventHandler) -> Element {
    let route = use_route::<Route>();
    let auth = use_context::<AuthState>();
    let navigator = use_context::<Navigator>();
    let sessions = use_context::<SessionClient>();

    let items = nav_items((auth.is_authenticated)());
    let has_user = auth.current_user.read().is_some();
    let admin_nav = navigator.clone();

    rsx! {
        aside { class: "drawer-side sidebar",
            div { class: "sidebar-header",
                h1 { class: "sidebar-brand", "GOTS Template" }
                div {
                    button {
                        class: "btn btn-ghost",
                        aria_label: "Hide sidebar",
                        onclick: move |_| on_collapse.call(()),
                        "«"
                    }
                    button {
                        class: "btn btn-ghost",
                        aria_label: "Close sidebar",
                        onclick: move |_| on_close_mobile.call(()),
                        "✕"
                    }
                }
            }

            ul { class: "sidebar-menu",
                for item in items {
                    li {
                        key: "{item.name}",
                        class: if item.route == route { "active" } else { "" },
                        Link {
                            to: item.route.clone(),
                            span { "{item.icon}" }
                            span { "{item.name}" }
                        }
                    }
                }

                if auth.is_admin() {
                    li {
                        a {
                            href: "#",
                            onclick: move |e| {
                                e.prevent_default();
                                if let Err(e) = admin_nav.open_in_new_context(ADMIN_PATH) {
                                    error!("Failed to open admin dashboard: {e}");
                                }
                            },
                            span { "⚙️" }
                            span { "Admin Dashboard" }
                        }
                    }
                }
            }

            div { class: "sidebar-footer",
                if has_user {
                    button {
                        class: "btn btn-outline btn-block",
                        onclick: move |_| {
                            let mut auth = auth;
                            let sessions = sessions.clone();
                            spawn(async move {
                                auth.logout(&sessions).await;
                            });
                        },
                        "Logout"
                    }
                } else {
                    button {
                        class: "btn btn-primary btn-block",
                        onclick: move |_| {
                            if let Err(e) = navigator.redirect(LOGIN_PATH) {
                                error!("Login redirect failed: {e}");
                            }
                        },
                        "Login"
                    }
                }
            }
        }
    }
}
