//! Authentication context and state management.

use crate::backend::api::{SessionClient, User};
use crate::frontend::services::guard::AuthSnapshot;
use crate::utils::Result;
use dioxus::prelude::*;
use tracing::{info, warn};

/// Authentication signals shared with the component tree through context.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
    /// True until the first session lookup settles.
    pub is_loading: Signal<bool>,
    pub current_user: Signal<Option<User>>,
}

impl AuthState {
    /// Creates the signals in the current scope, in the loading state.
    pub fn new() -> Self {
        Self {
            is_authenticated: Signal::new(false),
            is_loading: Signal::new(true),
            current_user: Signal::new(None),
        }
    }

    /// Reads every signal, subscribing the caller to all of them.
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_authenticated: (self.is_authenticated)(),
            is_loading: (self.is_loading)(),
            is_admin: self.is_admin(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.current_user
            .read()
            .as_ref()
            .is_some_and(|user| user.is_admin)
    }

    /// Asks the gateway for the current user and settles the loading state.
    pub async fn load_session(&mut self, sessions: &SessionClient) {
        self.is_loading.set(true);
        let user = settle_session(sessions.current_user().await);
        self.apply(settled_snapshot(user.as_ref()), user);
    }

    fn apply(&mut self, snapshot: AuthSnapshot, user: Option<User>) {
        self.current_user.set(user);
        self.is_authenticated.set(snapshot.is_authenticated);
        self.is_loading.set(snapshot.is_loading);
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
        self.is_authenticated.set(false);
    }

    /// Logs out locally, then closes the gateway session.
    pub async fn logout(&mut self, sessions: &SessionClient) {
        self.clear();
        if let Err(e) = sessions.logout().await {
            warn!("Gateway logout failed: {e}");
        }
    }

    /// Gets the current display name or returns "Guest" as default.
    pub fn display_name(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map_or_else(|| "Guest".to_string(), |user| user.display_name().to_string())
    }
}

/// Outcome of a session lookup. A gateway that cannot be reached counts as
/// no session, so the shell still renders.
pub fn settle_session(lookup: Result<Option<User>>) -> Option<User> {
    match lookup {
        Ok(Some(user)) => {
            info!("Signed in as {}", user.username);
            Some(user)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Session lookup failed, continuing anonymously: {e}");
            None
        }
    }
}

/// Auth state after a lookup has settled; never loading.
pub fn settled_snapshot(user: Option<&User>) -> AuthSnapshot {
    AuthSnapshot {
        is_authenticated: user.is_some(),
        is_loading: false,
        is_admin: user.is_some_and(|user| user.is_admin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Error;

    fn admin() -> User {
        User {
            id: "7".into(),
            username: "root".into(),
            email: None,
            name: None,
            is_admin: true,
        }
    }

    #[test]
    fn signed_in_lookup_authenticates() {
        let user = settle_session(Ok(Some(admin())));
        assert_eq!(user, Some(admin()));

        let snapshot = settled_snapshot(user.as_ref());
        assert!(snapshot.is_authenticated);
        assert!(snapshot.is_admin);
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn missing_session_is_anonymous() {
        let user = settle_session(Ok(None));
        assert_eq!(settled_snapshot(user.as_ref()), AuthSnapshot::default());
    }

    #[test]
    fn failed_lookup_is_anonymous_and_stops_loading() {
        for err in [
            Error::Network("connection refused".into()),
            Error::Http {
                status: 500,
                message: "boom".into(),
            },
            Error::Decode("current user: expected value".into()),
        ] {
            let user = settle_session(Err(err));
            assert!(user.is_none());

            let snapshot = settled_snapshot(user.as_ref());
            assert!(!snapshot.is_authenticated);
            assert!(!snapshot.is_loading);
        }
    }
}
