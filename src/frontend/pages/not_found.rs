use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "fullscreen-center",
            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
