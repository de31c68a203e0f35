//! Backend side of the application: HTTP clients, query cache, config.

pub mod api;
pub mod query;
pub mod utils;
