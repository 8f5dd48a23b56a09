use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; the service boots with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, résumé and catalog embeddings come from this remote
    /// service instead of the built-in deterministic embedder.
    pub embedding_service_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            embedding_service_url: std::env::var("EMBEDDING_SERVICE_URL").ok(),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            embedding_service_url: None,
        }
    }
}
