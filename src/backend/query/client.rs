//! Keyed query cache shared through the component tree.

use super::options::QueryOptions;
use super::query::Query;
use crate::utils::Result;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

type Entry = Arc<dyn Any + Send + Sync>;

/// Owns one [`Query`] per key, so every consumer of a key shares its cache
/// entry and its in-flight fetch.
#[derive(Clone, Default)]
pub struct QueryClient {
    queries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the query registered under `key`, creating it on first use.
    /// Options and fetcher are ignored when the entry already exists.
    ///
    /// A key already held by a query of another type keeps its entry; the
    /// caller gets an unregistered query so existing handles stay attached.
    pub fn query<T, F, Fut>(&self, key: &str, options: QueryOptions, fetcher: F) -> Query<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let mut queries = self.queries.lock().unwrap_or_else(PoisonError::into_inner);
        match queries.get(key) {
            Some(entry) => match entry.downcast_ref::<Query<T>>() {
                Some(existing) => existing.clone(),
                None => {
                    warn!(key, "Query key already registered with another type; not caching");
                    Query::new(key, options, fetcher)
                }
            },
            None => {
                debug!(key, "Registering query");
                let query = Query::new(key, options, fetcher);
                queries.insert(key.to_string(), Arc::new(query.clone()));
                query
            }
        }
    }
}
