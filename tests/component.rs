#![cfg(feature = "ssr")]

use leptos::prelude::*;
use leptos_lazy_chunk::component::{Chunk, LazyChunk, Passthrough};

fn init_renderer() -> Owner {
    let _ = any_spawner::Executor::init_tokio();
    let owner = Owner::new();
    owner.set();
    owner
}

#[component]
fn Report() -> impl IntoView {
    view! {
        <LazyChunk
            loader=|| async { ViewFn::from(|| "Loaded report") }
            fallback=|| "Loading report"
        />
    }
}

#[tokio::test]
async fn passthrough_renders_child() {
    let _owner = init_renderer();
    let app = view! {
        <Passthrough nodes=vec![ViewFn::from(|| view! { <p>"Hello world!"</p> })] />
    };
    assert!(app.to_html().contains("<p>Hello world!</p>"));
}

#[tokio::test]
async fn passthrough_rejects_many_children() {
    let _owner = init_renderer();
    let app = view! {
        <ErrorBoundary fallback=|errors| view! {
            <p>"caught " {move || errors.get().into_iter().count()}</p>
        }>
            <Passthrough nodes=vec![
                ViewFn::from(|| "first"),
                ViewFn::from(|| "second"),
            ] />
        </ErrorBoundary>
    };
    let html = app.to_html();
    assert!(html.contains("<p>caught <!>1</p>"));
    assert!(!html.contains("first"));
    assert!(!html.contains("second"));
}

#[tokio::test]
async fn lazy_chunk_renders_fallback_before_resolution() {
    let _owner = init_renderer();
    // Rendering to a string is synchronous, so the loader spawned on the
    // current thread cannot have completed yet.
    let html = view! { <Report /> }.to_html();
    assert!(html.contains("Loading report"));
    assert!(!html.contains("Loaded report"));
}

#[tokio::test]
async fn chunk_marker_throws_to_error_boundary() {
    let _owner = init_renderer();
    let app = view! {
        <ErrorBoundary fallback=|errors| view! {
            <p>"caught " {move || errors.get().into_iter().count()}</p>
        }>
            <Chunk>
                <p>"Never shown"</p>
            </Chunk>
        </ErrorBoundary>
    };
    let html = app.to_html();
    assert!(html.contains("<p>caught <!>1</p>"));
    assert!(!html.contains("Never shown"));
}
