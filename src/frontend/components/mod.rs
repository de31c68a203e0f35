//! UI components: layout shells and the guard routes that choose between them.

pub mod guards;
pub mod layout;
