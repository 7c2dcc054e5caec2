use std::fmt::Display;

use leptos::prelude::ViewFn;

use crate::ChunkError;

/// Conversion of a loaded value into the list of nodes it represents.
///
/// A chunk is only ever valid when this list holds exactly one node,
/// but the conversion itself does not enforce that; see [`only_child`].
pub trait IntoChildNodes<N> {
    fn into_child_nodes(self) -> Result<Vec<N>, ChunkError>;
}

impl<N> IntoChildNodes<N> for Vec<N> {
    fn into_child_nodes(self) -> Result<Vec<N>, ChunkError> {
        Ok(self)
    }
}

impl<N, const K: usize> IntoChildNodes<N> for [N; K] {
    fn into_child_nodes(self) -> Result<Vec<N>, ChunkError> {
        Ok(self.into())
    }
}

impl<N> IntoChildNodes<N> for Option<N> {
    fn into_child_nodes(self) -> Result<Vec<N>, ChunkError> {
        Ok(self.into_iter().collect())
    }
}

impl IntoChildNodes<ViewFn> for ViewFn {
    fn into_child_nodes(self) -> Result<Vec<ViewFn>, ChunkError> {
        Ok(vec![self])
    }
}

impl<N, T, E> IntoChildNodes<N> for Result<T, E>
where
    T: IntoChildNodes<N>,
    E: Display,
{
    fn into_child_nodes(self) -> Result<Vec<N>, ChunkError> {
        self.map_err(|e| ChunkError::Load(e.to_string()))?
            .into_child_nodes()
    }
}

/// Extract the one and only node out of `nodes`.
///
/// This is the single cardinality check shared by every chunk variant.
/// Any load error carried by `nodes` is passed through unchanged.
pub fn only_child<N>(nodes: impl IntoChildNodes<N>) -> Result<N, ChunkError> {
    match <[N; 1]>::try_from(nodes.into_child_nodes()?) {
        Ok([node]) => Ok(node),
        Err(nodes) => Err(ChunkError::Cardinality { found: nodes.len() }),
    }
}
