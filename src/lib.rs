//! This crate provides lazily loaded view subtrees for the Leptos web
//! framework.  A subtree is declared together with a loader, an async
//! factory that produces the subtree's single root view, and the
//! component that hosts it renders a placeholder until that factory
//! resolves, upon which the resolved view takes the placeholder's place.
//!
//! ## Use case
//!
//! Bundlers are typically able to split rarely used portions of an
//! application into separately fetched chunks, but doing so requires the
//! point where the split happens to be asynchronous.  Historically this
//! was achieved with a marker component that a build-time transform would
//! recognize, rewriting it into a component that lazily imports the
//! marker's children.  With Rust there is no need for such a rewrite, as
//! the asynchronous boundary may simply be declared with the
//! [`LazyChunk`](crate::component::LazyChunk) component.  The marker
//! itself, [`Chunk`](crate::component::Chunk), is still provided for code
//! that expects the rewrite to happen; should it ever be rendered, it will
//! fail loudly so that the misconfigured build is caught immediately.
//!
//! # Example
//!
//! ```
//! use leptos::prelude::*;
//! use leptos_lazy_chunk::component::LazyChunk;
//!
//! async fn load_report() -> Result<ViewFn, ServerFnError> {
//!     // fetch the data or module required by the report...
//!     Ok(ViewFn::from(|| view! { <table>/* rows */</table> }))
//! }
//!
//! #[component]
//! fn Dashboard() -> impl IntoView {
//!     view! {
//!         <h1>"Dashboard"</h1>
//!         <ErrorBoundary fallback=|_| view! { <p>"Report unavailable"</p> }>
//!             // The loader is invoked once, when `LazyChunk` is created.
//!             <LazyChunk loader=load_report fallback=|| "Loading report..."/>
//!         </ErrorBoundary>
//!     }
//! }
//! ```
//!
//! Outside of components, the same lifecycle is available through
//! [`DeferredChunk`] for any cloneable node type, and [`ResolvedChunk`]
//! for nodes that are available upfront.  Both validate that exactly one
//! node is held using [`only_child`].
//!
//! # Feature Flags
#![cfg_attr(
    feature = "document-features",
    cfg_attr(doc, doc = ::document_features::document_features!())
)]

mod children;
pub mod component;
mod deferred;
mod error;
mod marker;
mod passthrough;

#[cfg(test)]
mod tests;

pub use children::{only_child, IntoChildNodes};
pub use deferred::{ChunkLoader, ChunkState, DeferredChunk};
pub use error::ChunkError;
pub use marker::unprocessed_marker;
pub use passthrough::ResolvedChunk;
