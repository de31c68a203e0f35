//! Health status query hook and display helpers.

use crate::backend::api::{HealthClient, HealthStatus};
use crate::backend::query::{Query, QueryClient, QueryOptions, QueryState, RetryPolicy};
use dioxus::prelude::*;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::warn;

pub const HEALTH_QUERY_KEY: &str = "health";

pub const HEALTH_QUERY_OPTIONS: QueryOptions = QueryOptions {
    stale_time: Duration::from_secs(10),
    refetch_interval: Some(Duration::from_secs(30)),
    retry: RetryPolicy::new(3, Duration::from_secs(1), Duration::from_secs(30)),
};

/// The shared `"health"` cache entry.
pub fn health_query(client: &QueryClient, api: HealthClient) -> Query<HealthStatus> {
    client.query(HEALTH_QUERY_KEY, HEALTH_QUERY_OPTIONS, move || {
        let api = api.clone();
        async move { api.check().await }
    })
}

/// What `use_health_status` hands to the page.
#[derive(Clone)]
pub struct HealthStatusQuery {
    pub state: Signal<QueryState<HealthStatus>>,
    query: Query<HealthStatus>,
}

impl HealthStatusQuery {
    /// Re-fetches now, ignoring freshness. Joins a fetch already in flight.
    pub fn refetch(&self) {
        let query = self.query.clone();
        spawn(async move {
            if let Err(e) = query.refetch().await {
                warn!("Manual health refresh failed: {e}");
            }
        });
    }
}

/// Observes the health query for the lifetime of the calling component.
/// Unmounting cancels the observer task, which stops polling and delivery.
pub fn use_health_status() -> HealthStatusQuery {
    let client = use_context::<QueryClient>();
    let api = use_context::<HealthClient>();
    let query = use_hook(move || health_query(&client, api));
    let mut state = use_signal(|| query.state());

    let observed = query.clone();
    use_future(move || {
        let query = observed.clone();
        async move {
            let mut observer = query.observe();
            state.set(observer.current());
            while let Some(next) = observer.changed().await {
                state.set(next);
            }
        }
    });

    HealthStatusQuery { state, query }
}

/// Display bucket for a reported status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Healthy,
    Warning,
    Error,
    Neutral,
}

impl StatusTone {
    /// Case-insensitive and total: unknown statuses are neutral.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "ok" | "healthy" => Self::Healthy,
            "warning" => Self::Warning,
            "error" | "unhealthy" => Self::Error,
            _ => Self::Neutral,
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Healthy => "tone-healthy",
            Self::Warning => "tone-warning",
            Self::Error => "tone-error",
            Self::Neutral => "tone-neutral",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Healthy => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
            Self::Neutral => "ℹ️",
        }
    }
}

static DURATION_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[hms]").expect("valid uptime pattern"));

/// Go-style durations ("1h30m45s") pass through; whole seconds become
/// "1h 2m 3s"; anything else is shown raw.
pub fn format_uptime(uptime: &str) -> String {
    if DURATION_LIKE.is_match(uptime) {
        return uptime.to_string();
    }

    let Ok(seconds) = uptime.trim().parse::<u64>() else {
        return uptime.to_string();
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_cover_known_statuses() {
        assert_eq!(StatusTone::from_status("ok"), StatusTone::Healthy);
        assert_eq!(StatusTone::from_status("HEALTHY"), StatusTone::Healthy);
        assert_eq!(StatusTone::from_status("Warning"), StatusTone::Warning);
        assert_eq!(StatusTone::from_status("error"), StatusTone::Error);
        assert_eq!(StatusTone::from_status("unhealthy"), StatusTone::Error);
    }

    #[test]
    fn unknown_statuses_are_neutral() {
        for status in ["", "degraded", "okay", "fine", "💥"] {
            assert_eq!(StatusTone::from_status(status), StatusTone::Neutral, "{status:?}");
        }
        assert_eq!(StatusTone::Neutral.css_class(), "tone-neutral");
    }

    #[test]
    fn uptime_formats() {
        assert_eq!(format_uptime("1h30m45.5s"), "1h30m45.5s");
        assert_eq!(format_uptime("42m1s"), "42m1s");
        assert_eq!(format_uptime("3723"), "1h 2m 3s");
        assert_eq!(format_uptime("125"), "2m 5s");
        assert_eq!(format_uptime("7"), "7s");
        assert_eq!(format_uptime("forever"), "forever");
    }

    #[test]
    fn health_options_match_dashboard_policy() {
        assert_eq!(HEALTH_QUERY_OPTIONS.stale_time, Duration::from_secs(10));
        assert_eq!(HEALTH_QUERY_OPTIONS.refetch_interval, Some(Duration::from_secs(30)));
        assert_eq!(HEALTH_QUERY_OPTIONS.retry, RetryPolicy::default());
    }

    #[test]
    fn health_query_is_shared_by_key() {
        let client = QueryClient::new();
        let api = HealthClient::new(reqwest::Client::new(), "http://localhost:8081");

        let a = health_query(&client, api.clone());
        let b = health_query(&client, api);
        assert!(a.ptr_eq(&b));
        assert_eq!(a.key(), HEALTH_QUERY_KEY);
    }
}
