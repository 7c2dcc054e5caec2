use crate::ChunkError;

const UNPROCESSED: &str = "\
the `Chunk` marker was rendered directly, which shouldn't happen. \
The build-time transform is expected to rewrite every `Chunk` into a \
`LazyChunk` wrapping the original children in a loader; please check \
that the transform is part of the build, or declare the subtree with \
`LazyChunk` and an explicit `loader` instead.";

/// The outcome of rendering the unprocessed marker, which is always a
/// [`ChunkError::Configuration`].
pub fn unprocessed_marker<V>() -> Result<V, ChunkError> {
    tracing::error!("unprocessed chunk marker rendered");
    Err(ChunkError::Configuration(UNPROCESSED.to_string()))
}
