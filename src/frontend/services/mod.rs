//! Frontend services: auth context, guards, external navigation, health query.

pub mod context;
pub mod guard;
pub mod health;
pub mod navigation;
