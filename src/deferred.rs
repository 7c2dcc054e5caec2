use std::{
    fmt,
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use any_spawner::Executor;
use leptos::prelude::{ArcRwSignal, Update, With, WithUntracked};
use tokio::sync::watch::{channel, Receiver, Sender};

use crate::{only_child, ChunkError, IntoChildNodes};

type LoadFuture<N> = Pin<Box<dyn Future<Output = Result<Vec<N>, ChunkError>> + Send>>;

/// The factory that produces the asynchronous computation of a chunk.
///
/// Any `FnOnce() -> Fut` where the output of `Fut` may be converted via
/// [`IntoChildNodes`] can be turned into a loader, so components may
/// simply accept `#[prop(into)] loader: ChunkLoader<N>`.
pub struct ChunkLoader<N> {
    inner: Box<dyn FnOnce() -> LoadFuture<N> + Send>,
}

impl<N, F, Fut> From<F> for ChunkLoader<N>
where
    N: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: IntoChildNodes<N>,
{
    fn from(value: F) -> Self {
        Self {
            inner: Box::new(move || -> LoadFuture<N> {
                let fut = value();
                Box::pin(async move { fut.await.into_child_nodes() })
            }),
        }
    }
}

impl<N> ChunkLoader<N> {
    fn load(self) -> LoadFuture<N> {
        (self.inner)()
    }
}

/// The resolution state of a [`DeferredChunk`].
///
/// `Unresolved` transitions to `Resolved` exactly once; `Resolved` is
/// terminal for the lifetime of the chunk.
#[derive(Clone, Debug, PartialEq)]
pub enum ChunkState<N> {
    Unresolved,
    Resolved(Result<N, ChunkError>),
}

impl<N> ChunkState<N> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ChunkState::Resolved(_))
    }
}

/// A container for a lazily loaded child node.
///
/// Upon construction the loader is invoked and the resulting computation
/// is spawned onto the global [`Executor`], exactly once.  When the
/// computation completes, its output is validated through
/// [`only_child`] and stored into a reactive signal, so that anything
/// that called [`render`](DeferredChunk::render) inside a reactive
/// context (typically a view closure) will be rendered again.
///
/// Handles are cheap to clone and all point to the same state.
pub struct DeferredChunk<N> {
    inner: Arc<DeferredChunkInner<N>>,
}

struct DeferredChunkInner<N> {
    state: ArcRwSignal<ChunkState<N>>,
    settled: Receiver<bool>,
    torn_down: AtomicBool,
}

// Held by the spawned task so completion is published however the task
// ends, including a panicking loader.
struct SettledGuard {
    sender: Sender<bool>,
}

impl Drop for SettledGuard {
    fn drop(&mut self) {
        self.sender.send_replace(true);
    }
}

impl<N: 'static> Clone for DeferredChunk<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N> DeferredChunk<N>
where
    N: Clone + Send + Sync + 'static,
{
    /// Create the chunk and start loading it.
    ///
    /// This requires a global executor to have been initialized, which
    /// Leptos does for any mounted or server-rendered application.
    pub fn new(loader: impl Into<ChunkLoader<N>>) -> Self {
        let (sender, settled) = channel(false);
        let inner = Arc::new(DeferredChunkInner {
            state: ArcRwSignal::new(ChunkState::Unresolved),
            settled,
            torn_down: AtomicBool::new(false),
        });

        let fut = loader.into().load();
        tracing::debug!("spawning chunk loader");
        Executor::spawn({
            let inner = Arc::clone(&inner);
            let guard = SettledGuard { sender };
            async move {
                let _guard = guard;
                let result = fut.await.and_then(only_child);
                inner.settle(result);
            }
        });

        Self { inner }
    }

    /// Render the chunk.
    ///
    /// Returns `Ok(None)` as the placeholder while the computation is
    /// pending, a clone of the resolved node afterwards, or the error the
    /// resolution produced.  As the state is read through a tracked
    /// signal, calling this from within a reactive context subscribes
    /// that context to the resolution.
    pub fn render(&self) -> Result<Option<N>, ChunkError> {
        self.inner.state.with(|state| match state {
            ChunkState::Unresolved => Ok(None),
            ChunkState::Resolved(result) => result.clone().map(Some),
        })
    }
}

impl<N: 'static> DeferredChunk<N> {
    /// Whether the computation has resolved and been accepted.
    ///
    /// This does not track the underlying signal.
    pub fn is_resolved(&self) -> bool {
        self.inner.state.with_untracked(ChunkState::is_resolved)
    }

    /// Mark this chunk as torn down by its host.
    ///
    /// A resolution arriving after this will be discarded rather than
    /// written into the state, so the chunk stays unresolved.
    pub fn teardown(&self) {
        self.inner.torn_down.store(true, Ordering::Release);
    }

    /// Wait for the computation to complete.
    ///
    /// This returns immediately if it had already completed.  It also
    /// completes for a torn down chunk even though the result would have
    /// been discarded, and for a loader that panicked, in which case the
    /// chunk stays unresolved.
    pub async fn resolved(&self) {
        let mut receiver = self.inner.settled.clone();
        // `true` is always published before the sender goes away.
        let _ = receiver.wait_for(|settled| *settled).await;
    }
}

impl<N: 'static> DeferredChunkInner<N> {
    fn settle(&self, result: Result<N, ChunkError>) {
        if let Err(e) = &result {
            tracing::warn!(error = %e, "chunk loader produced an error");
        }
        // teardown is checked under the write lock so that a teardown
        // observed by any reader can no longer be followed by a write.
        let accepted = self
            .state
            .try_maybe_update(move |state| {
                if self.torn_down.load(Ordering::Acquire) || state.is_resolved() {
                    (false, false)
                } else {
                    *state = ChunkState::Resolved(result);
                    (true, true)
                }
            })
            .unwrap_or(false);
        if accepted {
            tracing::debug!("chunk resolved");
        } else {
            tracing::debug!("chunk torn down before resolution; discarding result");
        }
    }
}

impl<N: 'static> fmt::Debug for DeferredChunk<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredChunk")
            .field("resolved", &self.is_resolved())
            .field("torn_down", &self.inner.torn_down.load(Ordering::Acquire))
            .field("settled", &*self.inner.settled.borrow())
            .finish()
    }
}
