use crate::backend::api::SessionClient;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;

/// Account details of the signed-in user.
#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthState>();
    let sessions = use_context::<SessionClient>();
    let user = auth.current_user.read().clone();

    let Some(user) = user else {
        return rsx! {
            div { class: "page", p { "No active session." } }
        };
    };

    let display_name = auth.display_name();
    let email = user.email.clone().unwrap_or_else(|| "Not provided".to_string());
    let role = if user.is_admin { "Administrator" } else { "User" };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { "{display_name}" }
                p { "Manage your account" }
            }

            div { class: "card",
                h3 { "Account" }
                p { strong { "Username: " } "{user.username}" }
                p { strong { "Email: " } "{email}" }
                p { strong { "Role: " } "{role}" }
            }

            button {
                class: "btn btn-outline",
                onclick: move |_| {
                    let mut auth = auth;
                    let sessions = sessions.clone();
                    spawn(async move {
                        auth.logout(&sessions).await;
                    });
                },
                "Logout"
            }
        }
    }
}
