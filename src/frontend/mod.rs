//! Frontend of the application: layouts, guards, pages and UI services.

pub mod components;
pub mod pages;
pub mod services;
