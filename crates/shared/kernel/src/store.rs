//! Fetch-with-fallback state container.
//!
//! A [`ResilientStore`] asks its [`Source`] for records and publishes the result
//! through a `watch` channel. When the request fails, the store publishes the
//! normalized error message together with the source's compiled-in fallback, so
//! readers always have something to show.

use async_trait::async_trait;
use gamma_graphql::{ClientError, normalize};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Where a store gets its records.
#[async_trait]
pub trait Source: Send + Sync {
    type Item: Clone + Send + Sync;
    type Params: Send + Sync + ?Sized;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetches the current records.
    async fn fetch(&self, params: &Self::Params) -> Result<Vec<Self::Item>, ClientError>;

    /// Records to show when [`Source::fetch`] fails.
    fn fallback(&self) -> Vec<Self::Item>;
}

/// Snapshot of a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self { data: Vec::new(), loading: false, error: None }
    }
}

/// Result of a [`ResilientStore::fetch`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fetch was already running; nothing was requested.
    Skipped,
    /// Remote records were stored.
    Loaded,
    /// The request failed; the fallback records were stored along with the error.
    Fallback,
}

pub struct ResilientStore<S: Source> {
    source: S,
    state: watch::Sender<StoreState<S::Item>>,
}

impl<S: Source> ResilientStore<S> {
    pub fn new(source: S) -> Self {
        Self { source, state: watch::Sender::new(StoreState::default()) }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Loads records from the source.
    ///
    /// Only one fetch runs at a time: a call made while another is in flight returns
    /// [`FetchOutcome::Skipped`] immediately. On failure the error is normalized and the
    /// fallback records replace `data`; `loading` is always cleared afterwards, also
    /// when the returned future is dropped early.
    pub async fn fetch(&self, params: &S::Params) -> FetchOutcome {
        let started = self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.loading = true;
            state.error = None;
            true
        });

        if !started {
            debug!(store = self.source.name(), "Fetch already in flight, skipping");
            return FetchOutcome::Skipped;
        }

        let mut guard = LoadingGuard { state: &self.state, armed: true };
        let result = self.source.fetch(params).await;
        guard.armed = false;

        match result {
            Ok(data) => {
                debug!(store = self.source.name(), records = data.len(), "Store loaded");
                self.state.send_modify(|state| {
                    state.data = data;
                    state.loading = false;
                });
                FetchOutcome::Loaded
            },
            Err(e) => {
                let message = normalize(Some(&e));
                warn!(store = self.source.name(), error = %e, "Fetch failed, using fallback");
                let fallback = self.source.fallback();
                self.state.send_modify(|state| {
                    state.data = fallback;
                    state.error = Some(message);
                    state.loading = false;
                });
                FetchOutcome::Fallback
            },
        }
    }

    /// Empties `data` and clears `error`; `loading` is left as it is.
    pub fn clear_cache(&self) {
        self.state.send_modify(|state| {
            state.data.clear();
            state.error = None;
        });
    }

    #[must_use]
    pub fn state(&self) -> StoreState<S::Item> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn data(&self) -> Vec<S::Item> {
        self.state.borrow().data.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Runs `f` against a snapshot of the current records.
    ///
    /// No lock is held while `f` runs, so it may call back into the store.
    pub fn with_data<R>(&self, f: impl FnOnce(&[S::Item]) -> R) -> R {
        let data = self.data();
        f(&data)
    }

    /// A receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<S::Item>> {
        self.state.subscribe()
    }
}

impl<S: Source> std::fmt::Debug for ResilientStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ResilientStore")
            .field("source", &self.source.name())
            .field("records", &state.data.len())
            .field("loading", &state.loading)
            .field("error", &state.error)
            .finish()
    }
}

/// Clears `loading` if a fetch is abandoned before its request completes.
struct LoadingGuard<'a, T> {
    state: &'a watch::Sender<StoreState<T>>,
    armed: bool,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|state| state.loading = false);
        }
    }
}
