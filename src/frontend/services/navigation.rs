//! Navigation that leaves the client-side router: the server-owned login
//! page and the admin dashboard.

use crate::backend::api::endpoint;
use crate::utils::{Error, Result};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Replace the current page.
    SameContext,
    /// Open a new browsing context.
    NewContext,
}

pub trait ExternalNavigator: Send + Sync {
    fn open(&self, url: &str, target: Target) -> Result<()>;
}

/// Hands URLs to the system browser.
pub struct SystemBrowser;

impl ExternalNavigator for SystemBrowser {
    fn open(&self, url: &str, _target: Target) -> Result<()> {
        webbrowser::open(url).map_err(|e| Error::Navigation(format!("{url}: {e}")))
    }
}

/// Context handle resolving server paths against the backend origin.
#[derive(Clone)]
pub struct Navigator {
    base_url: String,
    backend: Arc<dyn ExternalNavigator>,
}

impl Navigator {
    pub fn new(base_url: impl Into<String>, backend: Arc<dyn ExternalNavigator>) -> Self {
        Self {
            base_url: base_url.into(),
            backend,
        }
    }

    pub fn system(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(SystemBrowser))
    }

    pub fn url_for(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Full-page navigation to a server-owned path.
    pub fn redirect(&self, path: &str) -> Result<()> {
        let url = self.url_for(path);
        info!("Redirecting to {url}");
        self.backend.open(&url, Target::SameContext)
    }

    pub fn open_in_new_context(&self, path: &str) -> Result<()> {
        self.backend.open(&self.url_for(path), Target::NewContext)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records navigations instead of performing them.
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub opened: Mutex<Vec<(String, Target)>>,
    }

    impl ExternalNavigator for RecordingNavigator {
        fn open(&self, url: &str, target: Target) -> Result<()> {
            self.opened.lock().unwrap().push((url.to_string(), target));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingNavigator;
    use super::*;
    use crate::backend::api::session::{ADMIN_PATH, LOGIN_PATH};

    #[test]
    fn redirect_targets_server_login() {
        let recorder = Arc::new(RecordingNavigator::default());
        let navigator = Navigator::new("http://localhost:8081/", recorder.clone());

        navigator.redirect(LOGIN_PATH).unwrap();
        navigator.open_in_new_context(ADMIN_PATH).unwrap();

        assert_eq!(
            *recorder.opened.lock().unwrap(),
            vec![
                ("http://localhost:8081/_/login".to_string(), Target::SameContext),
                ("http://localhost:8081/_/admin".to_string(), Target::NewContext),
            ]
        );
    }
}
