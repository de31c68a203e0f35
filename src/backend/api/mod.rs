//! HTTP clients for the backend API and the session gateway.

pub mod health;
pub mod session;

pub use health::{HealthClient, HealthStatus};
pub use session::{SessionClient, User};

use crate::backend::utils::config::ApiConfig;
use crate::utils::{Error, Result};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

const USER_AGENT: &str = concat!("gots-webapp/", env!("CARGO_PKG_VERSION"));

/// Builds the shared `reqwest` client for one backend origin.
pub fn build_client(config: &ApiConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = &config.session_cookie {
        let value = HeaderValue::from_str(cookie)
            .map_err(|e| Error::Config(format!("invalid session cookie: {e}")))?;
        headers.insert(COOKIE, value);
    }

    Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))
}

/// Joins the backend origin and an absolute path without doubling slashes.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turns a non-2xx response into [`Error::Http`], keeping a short body excerpt.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(http_error(status, &body))
}

pub(crate) fn http_error(status: StatusCode, body: &str) -> Error {
    let excerpt: String = body.trim().chars().take(200).collect();
    let message = if excerpt.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        excerpt
    };

    Error::Http {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        assert_eq!(
            endpoint("http://localhost:8081/", "/api/health"),
            "http://localhost:8081/api/health"
        );
        assert_eq!(endpoint("http://h", "_/me"), "http://h/_/me");
    }

    #[test]
    fn http_error_prefers_body_over_reason() {
        let err = http_error(StatusCode::SERVICE_UNAVAILABLE, "  draining  ");
        assert_eq!(
            err,
            Error::Http {
                status: 503,
                message: "draining".into()
            }
        );

        let err = http_error(StatusCode::NOT_FOUND, "");
        assert_eq!(err.to_string(), "HTTP error 404: Not Found");
    }

    #[test]
    fn rejects_unprintable_cookie() {
        let config = ApiConfig {
            session_cookie: Some("bad\ncookie".into()),
            ..ApiConfig::default()
        };
        assert!(matches!(build_client(&config), Err(Error::Config(_))));
    }
}
