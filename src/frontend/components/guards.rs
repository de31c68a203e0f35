//! Layout routes that pick a shell from the auth state.

use crate::backend::api::session::LOGIN_PATH;
use crate::backend::utils::css_loader::CssLoader;
use crate::backend::utils::route::Route;
use crate::frontend::components::layout::{MainLayout, PublicLayout};
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::{RouteDecision, enforce_protected, protected_route, public_route};
use crate::frontend::services::navigation::Navigator;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

#[component]
pub fn PublicRoutes() -> Element {
    let auth = use_context::<AuthState>();

    // Public routes always render; only the shell differs.
    match public_route(auth.snapshot()) {
        RouteDecision::RenderProtectedShell => rsx! {
            MainLayout { Outlet::<Route> {} }
        },
        _ => rsx! {
            PublicLayout { Outlet::<Route> {} }
        },
    }
}

#[component]
pub fn ProtectedRoutes() -> Element {
    let auth = use_context::<AuthState>();
    let navigator = use_context::<Navigator>();
    let login_url = navigator.url_for(LOGIN_PATH);

    // The redirect is a side effect of the auth signals, not of rendering.
    use_effect(move || {
        enforce_protected(auth.snapshot(), &navigator);
    });

    let decision = protected_route(auth.snapshot());
    if decision.renders_page() {
        return rsx! {
            MainLayout { Outlet::<Route> {} }
        };
    }

    rsx! {
        style { dangerous_inner_html: CssLoader::get_main() }
        div { class: "fullscreen-center",
            if decision == RouteDecision::ShowLoading {
                div { class: "spinner" }
                p { "Loading..." }
            } else {
                p { "Redirecting to login..." }
                a { href: "{login_url}", "Click here if not redirected automatically" }
            }
        }
    }
}
