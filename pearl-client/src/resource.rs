//! Remote resource state
//!
//! One fetch-and-store cycle per backend list: a resource is bound to a
//! dependency key, fetches when the key changes, and publishes a
//! [`FetchState`] over a watch channel for the view to render. A response
//! belonging to a superseded request is discarded, so the state always
//! reflects the latest request ("last request wins").

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::watch;

use crate::ClientResult;

/// Lifecycle of one remotely fetched value.
///
/// Exactly one variant holds at any time; a refetch replaces the whole
/// value, nothing is patched in place.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No dependency key bound; nothing has been requested
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request succeeded
    Loaded(T),
    /// The latest request failed; holds the user-facing summary.
    /// Error detail goes to the log, not into this message.
    Failed(String),
}

type FetchFn<K, T> = Arc<dyn Fn(K) -> BoxFuture<'static, ClientResult<T>> + Send + Sync>;

/// A remotely fetched list or value, keyed by a dependency.
///
/// The fetch function arrives already bound to its client, URL and token;
/// the resource only decides *when* to invoke it:
///
/// - `set_key(Some(k))` on a new key starts a fetch; `set_key(None)`
///   returns to `Idle` without a network call.
/// - `refetch()` re-runs the current key and is the only recovery path
///   after a failure; there are no automatic retries.
///
/// Each spawn bumps a generation counter. A completion whose generation
/// is no longer current is dropped, which keeps a slow response for an
/// old key from overwriting the state of a newer request.
pub struct RemoteResource<K, T> {
    label: String,
    fetch: FetchFn<K, T>,
    key: Option<K>,
    generation: Arc<AtomicU64>,
    tx: watch::Sender<FetchState<T>>,
}

impl<K, T> RemoteResource<K, T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Send + Sync + 'static,
{
    /// Create an idle resource.
    ///
    /// `label` names the resource in log lines and in the `Failed`
    /// summary ("Failed to fetch {label}").
    pub fn new<F, Fut>(label: impl Into<String>, fetch: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
    {
        let (tx, _) = watch::channel(FetchState::Idle);
        Self {
            label: label.into(),
            fetch: Arc::new(move |key| fetch(key).boxed()),
            key: None,
            generation: Arc::new(AtomicU64::new(0)),
            tx,
        }
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.tx.subscribe()
    }

    /// Snapshot the current state
    pub fn state(&self) -> FetchState<T>
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// The currently bound dependency key
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Bind the dependency key.
    ///
    /// `None` cancels interest in any in-flight request and leaves the
    /// resource `Idle`. Re-binding the same key is a no-op; use
    /// [`refetch`](Self::refetch) to force a re-run.
    pub fn set_key(&mut self, key: Option<K>) {
        if self.key == key {
            return;
        }
        self.key = key.clone();
        match key {
            Some(key) => self.spawn_fetch(key),
            None => {
                self.generation.fetch_add(1, Ordering::SeqCst);
                self.tx.send_replace(FetchState::Idle);
            }
        }
    }

    /// Re-run the fetch with the current key. No-op while no key is bound.
    pub fn refetch(&self) {
        if let Some(key) = self.key.clone() {
            self.spawn_fetch(key);
        }
    }

    fn spawn_fetch(&self, key: K) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_replace(FetchState::Loading);

        let fetch = Arc::clone(&self.fetch);
        let current = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        let label = self.label.clone();

        tokio::spawn(async move {
            let state = match fetch(key).await {
                Ok(data) => FetchState::Loaded(data),
                Err(err) => {
                    tracing::error!(resource = %label, error = %err, "fetch failed");
                    FetchState::Failed(format!("Failed to fetch {}", label))
                }
            };

            // The generation check runs under the channel lock, so a
            // superseded completion can never overwrite a newer one.
            let fresh = tx.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = state;
                true
            });
            if !fresh {
                tracing::debug!(resource = %label, "discarded stale response");
            }
        });
    }
}

impl<K, T> Drop for RemoteResource<K, T> {
    fn drop(&mut self) {
        // Cancel interest in any outstanding response.
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
