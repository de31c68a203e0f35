mod backend;
mod frontend;
mod utils;

use crate::backend::api::{HealthClient, SessionClient, build_client};
use crate::backend::query::QueryClient;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::Navigator;
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use tracing::info;

fn main() -> anyhow::Result<()> {
    utils::logging::init();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!("Using backend at {}", config.api.base_url);

    // Query fetches and polling run as tokio tasks
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create runtime")?;
    let _guard = runtime.enter();

    let http = build_client(&config.api).context("failed to build HTTP client")?;
    let health = HealthClient::new(http.clone(), &config.api.base_url);
    let sessions = SessionClient::new(http, &config.api.base_url);
    let navigator = Navigator::system(config.api.base_url.clone());

    let size = LogicalSize::new(config.ui.window_width, config.ui.window_height);
    let window = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("GOTS Template")
                .with_inner_size(size),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(window)
        .with_context(config)
        .with_context(QueryClient::new())
        .with_context(health)
        .with_context(sessions)
        .with_context(navigator)
        .launch(AppRoot);

    Ok(())
}

#[component]
fn AppRoot() -> Element {
    let sessions = use_context::<SessionClient>();
    let auth = use_context_provider(AuthState::new);

    use_future(move || {
        let sessions = sessions.clone();
        let mut auth = auth;
        async move { auth.load_session(&sessions).await }
    });

    rsx! { Router::<Route> {} }
}
