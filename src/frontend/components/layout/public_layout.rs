use crate::backend::api::session::LOGIN_PATH;
use crate::backend::utils::css_loader::CssLoader;
use crate::backend::utils::route::Route;
use crate::frontend::services::guard::page_title;
use crate::frontend::services::navigation::Navigator;
use dioxus::prelude::*;
use dioxus_router::components::Link;
use dioxus_router::use_route;
use tracing::error;

/// Shell for anonymous visitors: Home and Health links plus a login button.
#[component]
pub fn PublicLayout(children: Element) -> Element {
    let route = use_route::<Route>();
    let navigator = use_context::<Navigator>();
    let mut show_ui = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            show_ui.set(true);
        });
    });

    let title = page_title(&route.to_string());
    let login = move |_: MouseEvent| {
        if let Err(e) = navigator.redirect(LOGIN_PATH) {
            error!("Login redirect failed: {e}");
        }
    };

    rsx! {
        style {
            dangerous_inner_html: CssLoader::get_main()
        }

        div {
            class: if mobile_open() { "drawer drawer-open drawer-mobile-open" } else { "drawer drawer-open" },
            style: if show_ui() { "opacity: 1; transition: opacity 0.3s;" } else { "opacity: 0;" },

            aside { class: "drawer-side sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-brand", "GOTS Template" }
                }
                ul { class: "sidebar-menu",
                    li {
                        class: if matches!(route, Route::Home {}) { "active" } else { "" },
                        Link { to: Route::Home {}, span { "🏠" } span { "Home" } }
                    }
                    li {
                        class: if matches!(route, Route::Health {}) { "active" } else { "" },
                        Link { to: Route::Health {}, span { "🩺" } span { "Health" } }
                    }
                }
                div { class: "sidebar-footer",
                    button { class: "btn btn-primary btn-block", onclick: login.clone(), "Login" }
                }
            }

            div { class: "drawer-content",
                header { class: "navbar",
                    div { class: "navbar-start",
                        button {
                            class: "btn btn-ghost",
                            aria_label: "Toggle menu",
                            onclick: move |_| mobile_open.set(!mobile_open()),
                            "☰"
                        }
                        h1 { class: "page-title", "{title}" }
                    }
                    div { class: "navbar-end",
                        button { class: "btn btn-primary", onclick: login, "Login" }
                    }
                }

                main { class: "content",
                    {children}
                }
            }
        }
    }
}
