use leptos::prelude::*;

use crate::{
    deferred::{ChunkLoader, DeferredChunk},
    marker::unprocessed_marker,
    passthrough::ResolvedChunk,
};

/// The marker for a lazily loaded subtree.
///
/// This component is meant to be rewritten into a [`LazyChunk`] before
/// it is ever rendered, so rendering it will always result in a
/// [`ChunkError::Configuration`](crate::ChunkError::Configuration)
/// being thrown to the nearest `ErrorBoundary`, no matter what children
/// were provided.
#[allow(unused_variables)]
#[component]
pub fn Chunk(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    unprocessed_marker::<()>()
}

/// Render the single view produced by `loader` once it resolves.
///
/// The loader is invoked exactly once, when this component is created,
/// and `fallback` is shown until its future completes.  Should that
/// future produce anything other than exactly one view, or fail, the
/// resulting [`ChunkError`](crate::ChunkError) is thrown instead.
///
/// ```
/// use leptos::prelude::*;
/// use leptos_lazy_chunk::component::LazyChunk;
///
/// #[component]
/// fn Page() -> impl IntoView {
///     view! {
///         <LazyChunk
///             loader=|| async { ViewFn::from(|| view! { <p>"Loaded"</p> }) }
///             fallback=|| "Loading..."
///         />
///     }
/// }
/// ```
#[component]
pub fn LazyChunk(
    #[prop(into)] loader: ChunkLoader<ViewFn>,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView {
    let chunk = DeferredChunk::new(loader);
    on_cleanup({
        let chunk = chunk.clone();
        move || chunk.teardown()
    });

    move || match chunk.render() {
        Ok(Some(child)) => Ok(child.run()),
        Ok(None) => Ok(fallback.run()),
        Err(e) => Err(e),
    }
}

/// Render a single child that is already available.
#[component]
pub fn Passthrough(nodes: Vec<ViewFn>) -> impl IntoView {
    ResolvedChunk::new(nodes).render().map(|child| child.run())
}
