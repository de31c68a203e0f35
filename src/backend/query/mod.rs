//! In-memory query layer: keyed cache entries with stale time, polling,
//! retry with exponential backoff, and single-flight fetches.

pub mod client;
pub mod options;
pub mod query;

pub use client::QueryClient;
pub use options::{QueryOptions, RetryPolicy};
pub use query::{Query, QueryObserver, QueryState};
