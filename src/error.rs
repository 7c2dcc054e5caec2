use thiserror::Error;

/// Errors raised while rendering a chunk.
///
/// All variants are produced synchronously by a render call and are
/// meant to travel up to whatever `ErrorBoundary` the host view tree
/// provides; nothing in this crate attempts to recover from them.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    /// The unprocessed [`Chunk`](crate::component::Chunk) marker was
    /// rendered, meaning the rewrite that should have replaced it never
    /// happened.
    #[error("{0}")]
    Configuration(String),
    /// The chunk held something other than exactly one node.
    #[error("a chunk should have exactly one child, found {found}")]
    Cardinality { found: usize },
    /// The loader's computation completed with a failure.
    #[error("chunk failed to load: {0}")]
    Load(String),
}
