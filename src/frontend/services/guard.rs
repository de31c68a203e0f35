//! Route guard decisions, page titles and navigation entries.
//!
//! Everything here is a pure function of the auth state and the path, so the
//! guard components only translate a [`RouteDecision`] into markup.

use crate::backend::api::session::LOGIN_PATH;
use crate::backend::utils::route::Route;
use crate::frontend::services::navigation::Navigator;
use tracing::error;

/// Plain copy of the auth signals taken for one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    ShowLoading,
    RedirectToLogin,
    RenderProtectedShell,
    RenderPublicShell,
}

impl RouteDecision {
    pub fn renders_page(self) -> bool {
        matches!(self, Self::RenderProtectedShell | Self::RenderPublicShell)
    }
}

/// Gate for routes that need a session.
pub fn protected_route(auth: AuthSnapshot) -> RouteDecision {
    if auth.is_loading {
        RouteDecision::ShowLoading
    } else if !auth.is_authenticated {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::RenderProtectedShell
    }
}

/// Gate for public routes. Signed-in users always get the full shell.
/// `is_loading` is not consulted, so a pending session shows the public shell.
pub fn public_route(auth: AuthSnapshot) -> RouteDecision {
    if auth.is_authenticated {
        RouteDecision::RenderProtectedShell
    } else {
        RouteDecision::RenderPublicShell
    }
}

/// Runs the protected gate and performs the login redirect when it asks for one.
pub fn enforce_protected(auth: AuthSnapshot, navigator: &Navigator) -> RouteDecision {
    let decision = protected_route(auth);
    if decision == RouteDecision::RedirectToLogin {
        if let Err(e) = navigator.redirect(LOGIN_PATH) {
            error!("Login redirect failed: {e}");
        }
    }
    decision
}

const TITLES: &[(&str, &str)] = &[
    ("/profile", "Profile Settings"),
    ("/home", "Home"),
    ("/health", "System Health"),
];

pub fn page_title(path: &str) -> &'static str {
    TITLES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map_or("Home", |(_, title)| title)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub fn nav_items(is_authenticated: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            name: "Home",
            icon: "🏠",
            route: Route::Home {},
        },
        NavItem {
            name: "Health",
            icon: "🩺",
            route: Route::Health {},
        },
    ];
    if is_authenticated {
        items.push(NavItem {
            name: "Profile",
            icon: "👤",
            route: Route::Profile {},
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::navigation::testing::RecordingNavigator;
    use std::str::FromStr;
    use std::sync::Arc;

    fn parse(path: &str) -> Route {
        match Route::from_str(path) {
            Ok(route) => route,
            Err(_) => panic!("unroutable path {path}"),
        }
    }

    fn every_state() -> impl Iterator<Item = AuthSnapshot> {
        (0..8u8).map(|bits| AuthSnapshot {
            is_authenticated: bits & 1 != 0,
            is_loading: bits & 2 != 0,
            is_admin: bits & 4 != 0,
        })
    }

    #[test]
    fn protected_waits_while_loading() {
        for auth in every_state().filter(|a| a.is_loading) {
            assert_eq!(protected_route(auth), RouteDecision::ShowLoading, "{auth:?}");
        }
    }

    #[test]
    fn protected_redirects_anonymous_users() {
        for auth in every_state().filter(|a| !a.is_loading && !a.is_authenticated) {
            let decision = protected_route(auth);
            assert_eq!(decision, RouteDecision::RedirectToLogin);
            assert!(!decision.renders_page());
        }
    }

    #[test]
    fn protected_renders_for_signed_in_users() {
        let auth = AuthSnapshot {
            is_authenticated: true,
            ..AuthSnapshot::default()
        };
        assert_eq!(protected_route(auth), RouteDecision::RenderProtectedShell);
    }

    #[test]
    fn public_upgrades_signed_in_users() {
        for auth in every_state() {
            let expected = if auth.is_authenticated {
                RouteDecision::RenderProtectedShell
            } else {
                RouteDecision::RenderPublicShell
            };
            assert_eq!(public_route(auth), expected, "{auth:?}");
        }
    }

    #[test]
    fn titles_match_by_prefix() {
        assert_eq!(page_title("/profile"), "Profile Settings");
        assert_eq!(page_title("/profile/security"), "Profile Settings");
        assert_eq!(page_title("/home"), "Home");
        assert_eq!(page_title("/health"), "System Health");
        assert_eq!(page_title("/somewhere"), "Home");
    }

    #[test]
    fn profile_link_needs_session() {
        let anonymous: Vec<_> = nav_items(false).into_iter().map(|i| i.name).collect();
        let signed_in: Vec<_> = nav_items(true).into_iter().map(|i| i.name).collect();

        assert_eq!(anonymous, vec!["Home", "Health"]);
        assert_eq!(signed_in, vec!["Home", "Health", "Profile"]);
    }

    #[test]
    fn anonymous_profile_visit_redirects_without_content() {
        assert_eq!(parse("/profile"), Route::Profile {});

        let recorder = Arc::new(RecordingNavigator::default());
        let navigator = Navigator::new("http://localhost:8081", recorder.clone());
        let decision = enforce_protected(AuthSnapshot::default(), &navigator);

        assert_eq!(decision, RouteDecision::RedirectToLogin);
        assert!(!decision.renders_page());
        assert_eq!(recorder.opened.lock().unwrap().len(), 1);
        assert_eq!(recorder.opened.lock().unwrap()[0].0, "http://localhost:8081/_/login");
    }

    #[test]
    fn loading_and_signed_in_visits_never_redirect() {
        let recorder = Arc::new(RecordingNavigator::default());
        let navigator = Navigator::new("http://localhost:8081", recorder.clone());

        for auth in every_state().filter(|a| a.is_loading || a.is_authenticated) {
            enforce_protected(auth, &navigator);
        }
        assert!(recorder.opened.lock().unwrap().is_empty());
    }
}
