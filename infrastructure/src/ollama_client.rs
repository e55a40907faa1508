use async_trait::async_trait;
use domain::ports::TextEmbedder;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;
use shared::utils::join_url;
use std::sync::Arc;
use tracing::debug;

use crate::http::ensure_success;

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Client for an Ollama-compatible `/api/embed` endpoint.
#[derive(Clone)]
pub struct OllamaClient {
    client: Arc<Client>,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextEmbedder for OllamaClient {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>> {
        let url = join_url(&self.base_url, "api/embed");
        let request = EmbedRequest {
            model: &self.model,
            input: inputs,
        };
        debug!(model = %self.model, inputs = inputs.len(), "requesting embeddings");
        let response = self.client.post(&url).json(&request).send().await?;
        let response = ensure_success("embedding service", response).await?;
        let body: EmbedResponse = response.json().await?;
        Ok(body.embeddings)
    }
}
