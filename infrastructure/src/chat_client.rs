use async_trait::async_trait;
use domain::error::RagError;
use domain::ports::ChatGenerator;
use domain::session::Message;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;
use shared::utils::join_url;
use std::sync::Arc;
use tracing::debug;

use crate::http::ensure_success;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn first_content(self) -> Result<String> {
        let choice = self.choices.into_iter().next().ok_or(RagError::NoChoices)?;
        Ok(choice.message.content.unwrap_or_default())
    }
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ChatGenerator for OpenAiClient {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String> {
        let url = join_url(&self.base_url, "chat/completions");
        let request = ChatRequest { model, messages };
        debug!(model, messages = messages.len(), "requesting completion");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success("completion endpoint", response).await?;
        let body: ChatResponse = response.json().await?;
        body.first_content()
    }
}
