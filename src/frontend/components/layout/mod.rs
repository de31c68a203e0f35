//! Layout components.

pub mod header;
pub mod main;
pub mod navigation;
pub mod public_layout;

pub use header::Header;
pub use main::MainLayout;
pub use navigation::Sidebar;
pub use public_layout::PublicLayout;
