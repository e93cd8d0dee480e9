//! Lifecycle-bound data loading for a single view.
//!
//! A view loads its data once per mount and once per change of its route key.
//! When the view is re-mounted with a new key or torn down while a load is
//! outstanding, the late result must not reach the view. [`ViewSession`]
//! enforces this with a generation counter that only changes under the state
//! channel's write lock, so a result is applied only if no newer mount (or
//! unmount) happened in between.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::AppError;

/// Display state of a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    /// Nothing mounted yet.
    Idle,
    Loading,
    Loaded(T),
    NotFound(String),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Maps a resolution outcome onto a display state.
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) if e.is_not_found() => Self::NotFound(e.message().to_string()),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// True once a load has produced an outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::NotFound(_) | Self::Failed(_))
    }
}

/// Owns the load state of one mounted view.
///
/// Dropping the session aborts the outstanding load.
pub struct ViewSession<T> {
    state: Arc<watch::Sender<LoadState<T>>>,
    generation: Arc<AtomicU64>,
    key: Option<String>,
    task: Option<JoinHandle<()>>,
}

impl<T> ViewSession<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            key: None,
            task: None,
        }
    }

    /// Route key of the current mount.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.state.subscribe()
    }

    /// Mounts the view for `key` and starts `load`.
    ///
    /// Returns `false` without starting anything when the view is already
    /// mounted for the same key. Otherwise the previous load is aborted and
    /// its result, should it still arrive, is discarded.
    pub fn mount<F>(&mut self, key: impl Into<String>, load: F) -> bool
    where
        F: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        let key = key.into();
        if self.task.is_some() && self.key.as_deref() == Some(key.as_str()) {
            return false;
        }

        self.abort_task();

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = LoadState::Loading;
        });

        debug!(key = %key, generation, "Mounting view");

        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let task_key = key.clone();

        self.task = Some(tokio::spawn(async move {
            let outcome = LoadState::from_result(load.await);

            let applied = state.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = outcome;
                true
            });

            if !applied {
                debug!(key = %task_key, generation, "Discarding stale load result");
            }
        }));
        self.key = Some(key);

        true
    }

    /// Tears the view down and publishes [`LoadState::Idle`]; any outstanding
    /// result is discarded.
    pub fn unmount(&mut self) {
        self.abort_task();
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *state = LoadState::Idle;
        });
        self.key = None;
    }

    /// Waits until the current mount has produced an outcome.
    ///
    /// Never resolves while the session is [`LoadState::Idle`].
    pub async fn settled(&self) -> LoadState<T> {
        let mut rx = self.state.subscribe();
        match rx.wait_for(LoadState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.current(),
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

}

impl<T> Default for ViewSession<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ViewSession<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
