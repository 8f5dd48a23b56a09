mod catalog;
mod config;
mod embedding;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{builtin_jobs, JobCatalog};
use crate::config::Config;
use crate::embedding::{Embedder, HashEmbedder, HttpEmbedder};
use crate::matching::Matcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Select the embedding backend (remote service when configured,
    // deterministic feature hashing otherwise)
    let embedder: Arc<dyn Embedder> = match &config.embedding_service_url {
        Some(url) => {
            info!("Using remote embedding service at {url}");
            Arc::new(HttpEmbedder::new(url.clone()))
        }
        None => {
            info!("Using built-in hash embedder");
            Arc::new(HashEmbedder::default())
        }
    };

    // Embed the job catalog once; it is immutable for the process lifetime
    let catalog = JobCatalog::build(embedder.as_ref(), builtin_jobs()).await?;

    let matcher = Arc::new(Matcher::new(catalog, embedder));

    // Build app state
    let state = AppState {
        config: config.clone(),
        matcher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
