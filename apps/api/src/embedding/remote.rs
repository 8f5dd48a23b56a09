//! Remote embedding backend — delegates to a sentence-embedding service
//! over HTTP. Used when EMBEDDING_SERVICE_URL is set; the service is
//! expected to accept `{"text": ...}` and reply `{"embedding": [...]}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{EmbedError, Embedder};

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

/// Client for an external embedding service. Retries on 429 and 5xx with
/// exponential backoff, the same policy the rest of the service uses for
/// upstream HTTP calls.
pub struct HttpEmbedder {
    client: Client,
    endpoint: String,
}

impl HttpEmbedder {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let request_body = EmbedRequest { text };

        let mut last_error: Option<EmbedError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Embedding call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbedError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embedding service returned {}: {}", status, body);
                last_error = Some(EmbedError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(EmbedError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: EmbedResponse = response.json().await?;

            if parsed.embedding.is_empty() {
                return Err(EmbedError::EmptyEmbedding);
            }

            debug!("Embedding call succeeded: dimension={}", parsed.embedding.len());

            return Ok(parsed.embedding);
        }

        Err(last_error.unwrap_or(EmbedError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_request_serializes_text_field() {
        let body = serde_json::to_value(EmbedRequest { text: "resume" }).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "resume" }));
    }

    #[test]
    fn test_embed_response_deserializes_vector() {
        let parsed: EmbedResponse =
            serde_json::from_str(r#"{"embedding": [0.1, -0.2, 0.3]}"#).unwrap();
        assert_eq!(parsed.embedding.len(), 3);
    }
}
