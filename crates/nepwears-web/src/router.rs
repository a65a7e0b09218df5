//! Web router using Axum

use axum::{extract::State, response::Html, routing::get, Json, Router};
use nepwears_core::{CollectionItem, StorefrontConfig, StorefrontProfile};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

/// Create the web router
///
/// Serves the built frontend from `dist_dir` when it contains an
/// `index.html`; otherwise every non-API path gets the build instructions.
pub fn create_router(config: Arc<StorefrontConfig>, dist_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/collections", get(collections_handler))
        .route("/api/storefront", get(storefront_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(config);

    let index = dist_dir.join("index.html");
    if index.exists() {
        debug!(dist = %dist_dir.display(), "Serving built frontend");
        // Client-side routes fall back to the SPA shell
        api.fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
    } else {
        api.fallback(setup_handler)
    }
}

async fn collections_handler(
    State(config): State<Arc<StorefrontConfig>>,
) -> Json<Vec<CollectionItem>> {
    Json(config.collections.clone())
}

async fn storefront_handler(
    State(config): State<Arc<StorefrontConfig>>,
) -> Json<StorefrontProfile> {
    Json(config.profile())
}

async fn health_handler(State(config): State<Arc<StorefrontConfig>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "brand": config.brand,
        "collections": config.collections.len(),
    }))
}

async fn setup_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>NepWears - Build Required</title>
    <style>
        body { font-family: system-ui, -apple-system, sans-serif; background: #f5f5f5; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
        .setup-message { max-width: 600px; background: white; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
        code { background: #f0f0f0; padding: 0.25rem 0.5rem; border-radius: 4px; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>NepWears - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the storefront can be displayed.</p>
        <ol>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/nepwears-web &amp;&amp; trunk build --release</code></li>
            <li>Restart server: <code>nepwears serve</code></li>
        </ol>
        <p>API endpoints available now: <a href="/api/collections">/api/collections</a>, <a href="/api/storefront">/api/storefront</a>, <a href="/api/health">/api/health</a></p>
    </div>
</body>
</html>"#,
    )
}
