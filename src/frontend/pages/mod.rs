//! Routed pages.

pub mod health;
pub mod home;
pub mod not_found;
pub mod profile;

pub use health::Health;
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
