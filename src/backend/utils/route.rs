use crate::frontend::components::guards::{ProtectedRoutes, PublicRoutes};
use crate::frontend::pages::{Health, Home, NotFound, Profile};

use dioxus::prelude::*;
use dioxus_router::Routable;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicRoutes)]
        #[route("/home")]
        Home {},
        #[route("/health")]
        Health {},
    #[end_layout]
    #[layout(ProtectedRoutes)]
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[redirect("/", || Route::Home {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::from_str("/home").ok(), Some(Route::Home {}));
        assert_eq!(Route::from_str("/health").ok(), Some(Route::Health {}));
        assert_eq!(Route::from_str("/profile").ok(), Some(Route::Profile {}));
    }

    #[test]
    fn root_redirects_home() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
    }

    #[test]
    fn unknown_paths_render_not_found() {
        assert_eq!(
            Route::from_str("/unknown").ok(),
            Some(Route::NotFound {
                segments: vec!["unknown".to_string()]
            })
        );
    }

    #[test]
    fn routes_display_as_paths() {
        assert_eq!(Route::Profile {}.to_string(), "/profile");
        assert_eq!(Route::Home {}.to_string(), "/home");
    }
}
