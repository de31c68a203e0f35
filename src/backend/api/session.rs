//! Session gateway: current user and logout.

use super::{endpoint, ensure_success};
use crate::utils::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const LOGIN_PATH: &str = "/_/login";
pub const LOGOUT_PATH: &str = "/_/logout";
pub const ADMIN_PATH: &str = "/_/admin";
pub const ME_PATH: &str = "/_/me";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Full name when known, else the username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Clone)]
pub struct SessionClient {
    client: Client,
    base_url: String,
}

impl SessionClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Current user, or `None` when the gateway reports no session.
    pub async fn current_user(&self) -> Result<Option<User>> {
        let url = endpoint(&self.base_url, ME_PATH);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        if is_anonymous(response.status()) {
            return Ok(None);
        }

        let body = ensure_success(response).await?.text().await?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| Error::Decode(format!("current user: {e}")))
    }

    pub async fn logout(&self) -> Result<()> {
        let url = endpoint(&self.base_url, LOGOUT_PATH);
        let response = self.client.get(&url).send().await?;
        ensure_success(response).await?;
        info!("Session closed");
        Ok(())
    }
}

fn is_anonymous(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_gateway_user() {
        let user: User = serde_json::from_str(
            r#"{"id":"42","username":"ada","email":"ada@example.com","isAdmin":true}"#,
        )
        .unwrap();

        assert!(user.is_admin);
        assert_eq!(user.display_name(), "ada");
    }

    #[test]
    fn display_name_prefers_full_name() {
        let user = User {
            id: "1".into(),
            username: "grace".into(),
            email: None,
            name: Some("Grace Hopper".into()),
            is_admin: false,
        };
        assert_eq!(user.display_name(), "Grace Hopper");
    }

    #[test]
    fn unauthorized_means_anonymous() {
        assert!(is_anonymous(StatusCode::UNAUTHORIZED));
        assert!(is_anonymous(StatusCode::FORBIDDEN));
        assert!(!is_anonymous(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
