//! nepwears-web - Web frontend for NepWears using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use nepwears_core::StorefrontConfig;
    use std::net::SocketAddr;
    use std::path::Path;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server
    pub async fn run(config: StorefrontConfig, port: u16, dist_dir: &Path) -> Result<()> {
        let router = super::create_router(Arc::new(config), dist_dir);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(%addr, "Web server listening");
        println!("Storefront listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
