//! A single cached query: fetch coalescing, stale gate, retries and polling.

use super::options::QueryOptions;
use crate::utils::{Error, Result};
use chrono::{DateTime, Local};
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;
type SharedFetch<T> = Shared<BoxFuture<'static, Result<Arc<T>>>>;

/// Snapshot of a query as seen by its consumers.
#[derive(Debug)]
pub struct QueryState<T> {
    /// Result of the most recent successful fetch.
    pub data: Option<Arc<T>>,
    /// Set only once every retry has failed; cleared by the next success.
    pub error: Option<Error>,
    pub is_fetching: bool,
    /// Failed attempts in the current fetch, 0 after a success.
    pub failure_count: u32,
    /// Error of the latest failed attempt, visible while retrying.
    pub failure_reason: Option<Error>,
    pub updated_at: Option<DateTime<Local>>,
}

impl<T> QueryState<T> {
    /// True only while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_fetching
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
            failure_count: 0,
            failure_reason: None,
            updated_at: None,
        }
    }
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            is_fetching: self.is_fetching,
            failure_count: self.failure_count,
            failure_reason: self.failure_reason.clone(),
            updated_at: self.updated_at,
        }
    }
}

struct Inner<T> {
    key: String,
    options: QueryOptions,
    fetcher: Fetcher<T>,
    state: watch::Sender<QueryState<T>>,
    in_flight: Mutex<Option<SharedFetch<T>>>,
    fresh_until: Mutex<Option<Instant>>,
}

/// Cheap handle to one cache entry; clones share the same state.
pub struct Query<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Send + Sync + 'static> Query<T> {
    pub fn new<F, Fut>(key: impl Into<String>, options: QueryOptions, fetcher: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let fetcher: Fetcher<T> = Arc::new(move || fetcher().boxed());
        let (state, _) = watch::channel(QueryState::default());

        Self {
            inner: Arc::new(Inner {
                key: key.into(),
                options,
                fetcher,
                state,
                in_flight: Mutex::new(None),
                fresh_until: Mutex::new(None),
            }),
        }
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn state(&self) -> QueryState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.inner.state.subscribe()
    }

    /// Whether both handles point at the same cache entry.
    #[cfg(test)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn is_stale(&self) -> bool {
        lock(&self.inner.fresh_until).is_none_or(|until| Instant::now() >= until)
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        lock(&self.inner.in_flight).is_some()
    }

    /// Starts a fetch when the cached data is stale. Returns whether a fetch
    /// is now running because of this call (new or joined).
    pub fn ensure_fresh(&self) -> bool {
        if !self.is_stale() {
            return false;
        }
        drop(self.start());
        true
    }

    /// Fetches regardless of freshness, joining any fetch already in flight.
    pub async fn refetch(&self) -> Result<Arc<T>> {
        self.start().await
    }

    /// Subscribes with mount semantics: fetch if stale, then poll every
    /// `refetch_interval` until the observer is dropped.
    pub fn observe(&self) -> QueryObserver<T> {
        let receiver = self.subscribe();
        self.ensure_fresh();

        let poller = self.inner.options.refetch_interval.map(|period| {
            let query = self.clone();
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    debug!(key = %query.key(), "Polling query");
                    // Failures are already recorded in the query state.
                    let _ = query.refetch().await;
                }
            })
        });

        QueryObserver { receiver, poller }
    }

    fn start(&self) -> SharedFetch<T> {
        let mut slot = lock(&self.inner.in_flight);
        if let Some(fetch) = slot.as_ref() {
            debug!(key = %self.inner.key, "Joining in-flight fetch");
            return fetch.clone();
        }

        let inner = Arc::clone(&self.inner);
        // The slot lock is held until the handle is stored, so the task can
        // only clear it after this call returns. A panicking fetcher settles
        // like any other failure instead of leaving the slot occupied.
        let task = tokio::spawn(async move {
            let result = match AssertUnwindSafe(inner.run()).catch_unwind().await {
                Ok(result) => result,
                Err(panic) => Err(inner.fail(Error::Task(panic_message(&*panic)))),
            };
            *lock(&inner.in_flight) = None;
            result
        });

        let owner = Arc::clone(&self.inner);
        let fetch = async move {
            match task.await {
                Ok(result) => result,
                // Cancelled with the runtime; the task never reached its cleanup.
                Err(e) => {
                    let err = owner.fail(Error::from(e));
                    *lock(&owner.in_flight) = None;
                    Err(err)
                }
            }
        }
        .boxed()
        .shared();
        *slot = Some(fetch.clone());
        fetch
    }
}

impl<T: Send + Sync + 'static> Inner<T> {
    async fn run(&self) -> Result<Arc<T>> {
        self.state.send_modify(|s| s.is_fetching = true);

        let mut attempt = 0;
        loop {
            match (self.fetcher)().await {
                Ok(value) => {
                    let value = Arc::new(value);
                    *lock(&self.fresh_until) = Some(Instant::now() + self.options.stale_time);
                    self.state.send_modify(|s| {
                        s.data = Some(Arc::clone(&value));
                        s.error = None;
                        s.is_fetching = false;
                        s.failure_count = 0;
                        s.failure_reason = None;
                        s.updated_at = Some(Local::now());
                    });
                    debug!(key = %self.key, attempts = attempt + 1, "Query settled");
                    return Ok(value);
                }
                Err(err) => {
                    self.state.send_modify(|s| {
                        s.failure_count = attempt + 1;
                        s.failure_reason = Some(err.clone());
                    });

                    if attempt >= self.options.retry.retries {
                        let err = Error::RetriesExhausted {
                            attempts: attempt + 1,
                            last: Box::new(err),
                        };
                        return Err(self.fail(err));
                    }

                    let delay = self.options.retry.delay_for(attempt);
                    warn!(key = %self.key, attempt, "Fetch failed: {err}; retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Settles the current fetch as failed: data is dropped and the error set.
    fn fail(&self, err: Error) -> Error {
        *lock(&self.fresh_until) = None;
        self.state.send_modify(|s| {
            s.data = None;
            s.error = Some(err.clone());
            s.is_fetching = false;
        });
        warn!(key = %self.key, "{err}");
        err
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    let detail = panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause");
    format!("fetch panicked: {detail}")
}

/// A mounted consumer of a query. Dropping it stops polling; fetches already
/// in flight still settle into the cache but are no longer delivered here.
pub struct QueryObserver<T> {
    receiver: watch::Receiver<QueryState<T>>,
    poller: Option<JoinHandle<()>>,
}

impl<T> QueryObserver<T> {
    pub fn current(&self) -> QueryState<T> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next state change.
    pub async fn changed(&mut self) -> Option<QueryState<T>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

impl<T> Drop for QueryObserver<T> {
    fn drop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}
