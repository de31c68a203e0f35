//! Utility modules for the application backend.

/// Application configuration.
pub mod config;
/// Embedded stylesheets.
pub mod css_loader;
/// Application routing system.
pub mod route;
