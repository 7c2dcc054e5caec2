use crate::{only_child, ChunkError, IntoChildNodes};

/// A chunk whose child is already available at construction.
///
/// The cardinality of the supplied nodes is checked once, upon
/// construction, and every render afterwards reports the same outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedChunk<N> {
    child: Result<N, ChunkError>,
}

impl<N> ResolvedChunk<N> {
    pub fn new(nodes: impl IntoChildNodes<N>) -> Self {
        Self {
            child: only_child(nodes),
        }
    }
}

impl<N: Clone> ResolvedChunk<N> {
    pub fn render(&self) -> Result<N, ChunkError> {
        self.child.clone()
    }
}
