use crate::backend::utils::css_loader::CssLoader;
use crate::frontend::services::health::{StatusTone, format_uptime, use_health_status};
use dioxus::prelude::*;

/// Live view of the backend health endpoint.
#[component]
pub fn Health() -> Element {
    let health = use_health_status();
    let state = health.state.read().clone();
    let loading = state.is_loading();

    let last_checked = state
        .updated_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let refresh = health.clone();

    rsx! {
        style { dangerous_inner_html: CssLoader::get_health() }

        div { class: "page",
            div { class: "page-header health-header",
                div {
                    h1 { "System Health" }
                    p { "Monitor the application health status" }
                }
                button {
                    class: "btn btn-primary",
                    disabled: loading,
                    onclick: move |_| refresh.refetch(),
                    if loading { "🔄 Checking..." } else { "🔄 Refresh" }
                }
            }

            if let Some(error) = &state.error {
                div { class: "error-banner",
                    span { "❌" }
                    strong { "Error!" }
                    span { "{error}" }
                }
            }

            if loading && state.data.is_none() {
                div { class: "card loading-card",
                    div { class: "spinner" }
                    p { "Checking system health..." }
                }
            }

            if let Some(data) = &state.data {
                {
                    let tone = StatusTone::from_status(&data.status);
                    let badge_class = format!("status-badge {}", tone.css_class());
                    let icon = tone.icon();
                    let status = data.status.to_uppercase();
                    let server_time = data.server_time();
                    let uptime = data.uptime.as_deref().map(format_uptime);
                    let raw = serde_json::to_string_pretty(data.as_ref()).unwrap_or_default();
                    rsx! {
                        div { class: "card",
                            div { class: "status-row",
                                h2 { "Current Status" }
                                div { class: "{badge_class}",
                                    span { "{icon} " }
                                    "{status}"
                                }
                            }
                            div { class: "muted", "Last checked: {last_checked}" }
                        }

                        div { class: "grid",
                            div { class: "card",
                                h3 { "🕐 Server Time" }
                                p { "{server_time}" }
                            }
                            if let Some(version) = &data.version {
                                div { class: "card",
                                    h3 { "📦 Version" }
                                    p { class: "mono", "{version}" }
                                }
                            }
                            if let Some(uptime) = uptime {
                                div { class: "card",
                                    h3 { "⏱️ Uptime" }
                                    p { class: "mono", "{uptime}" }
                                }
                            }
                        }

                        div { class: "card",
                            h3 { "🔍 Raw Health Response" }
                            pre { class: "raw-response", "{raw}" }
                        }
                    }
                }
            }

            div { class: "info-panel",
                h3 { "ℹ️ About Health Monitoring" }
                p {
                    "This page polls the backend health endpoint every 30 seconds. "
                    "Failed checks are retried with exponential backoff before an error is shown."
                }
            }
        }
    }
}
