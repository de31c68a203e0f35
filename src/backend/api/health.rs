//! Backend health endpoint.

use super::{endpoint, ensure_success};
use crate::utils::{Error, Result};
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const HEALTH_PATH: &str = "/api/health";

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339 server time.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
}

impl HealthStatus {
    /// Server time in the local zone, or the raw value when it does not parse.
    pub fn server_time(&self) -> String {
        DateTime::parse_from_rfc3339(&self.timestamp).map_or_else(
            |_| self.timestamp.clone(),
            |time| {
                time.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            },
        )
    }
}

#[derive(Clone)]
pub struct HealthClient {
    client: Client,
    url: String,
}

impl HealthClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: endpoint(base_url, HEALTH_PATH),
        }
    }

    /// One health request, no retries.
    pub async fn check(&self) -> Result<HealthStatus> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let response = ensure_success(response).await?;
        let body = response.text().await?;
        parse_health(&body)
    }
}

pub fn parse_health(body: &str) -> Result<HealthStatus> {
    serde_json::from_str(body).map_err(|e| Error::Decode(format!("health response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let status = parse_health(
            r#"{"status":"ok","timestamp":"2025-03-01T12:00:00Z","version":"1.0.0","uptime":"1h2m3.5s"}"#,
        )
        .unwrap();

        assert_eq!(status.status, "ok");
        assert_eq!(status.version.as_deref(), Some("1.0.0"));
        assert_eq!(status.uptime.as_deref(), Some("1h2m3.5s"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let status = parse_health(r#"{"status":"warning","timestamp":"now"}"#).unwrap();

        assert!(status.version.is_none());
        assert_eq!(status.server_time(), "now");
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            r#"{"status":"warning","timestamp":"now"}"#
        );
    }

    #[test]
    fn missing_status_is_a_decode_error() {
        assert!(matches!(
            parse_health(r#"{"timestamp":"now"}"#),
            Err(Error::Decode(_))
        ));
    }
}
