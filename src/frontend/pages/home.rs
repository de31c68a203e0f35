use dioxus::prelude::*;

const STACK: &[(&str, &str)] = &[
    ("Dioxus", "Components, signals and the client-side router"),
    ("reqwest", "HTTP client for the health and session endpoints"),
    ("tokio", "Timers for polling and retry backoff"),
    ("serde", "JSON models shared with the backend"),
];

/// Static landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { "GOTS Template" }
                p { "A full-stack template for building modern web applications" }
            }

            div { class: "card",
                h2 { "Overview" }
                p {
                    "The GOTS template pairs a Go backend described by an OpenAPI contract "
                    "with this front-end shell. Sign-in is handled by the gateway in front "
                    "of the backend; this application only reacts to the session it reports."
                }
                p {
                    "Public pages are available to everyone. Signing in unlocks the profile "
                    "page and, for administrators, a link to the admin dashboard."
                }
            }

            div { class: "card",
                h3 { "⚙️ Front-end stack" }
                ul {
                    for (name, role) in STACK {
                        li { key: "{name}", strong { "{name}" } " - {role}" }
                    }
                }
            }
        }
    }
}
