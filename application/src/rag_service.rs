use anyhow::Context;
use domain::models::{Query, RagAnswer, SearchRequest};
use domain::ports::{ChatGenerator, TextEmbedder, VectorIndex};
use domain::prompt::{build_context, build_messages, build_prompt};
use domain::session::Role;
use infrastructure::{
    chat_client::OpenAiClient, config::Config, embedder::Embedder,
    ollama_client::OllamaClient, qdrant_client::QdrantClient,
};
use shared::telemetry::Telemetry;
use shared::types::Result;
use tracing::{debug, info};

/// Per-run settings that are not tied to a particular client.
#[derive(Debug, Clone)]
pub struct RagSettings {
    pub collection: String,
    pub limit: u64,
    pub score_threshold: Option<f32>,
    pub chat_model: String,
    pub instruction_role: Role,
}

impl RagSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            collection: config.collection.clone(),
            limit: config.retrieval_limit,
            score_threshold: config.score_threshold,
            chat_model: config.chat_model.clone(),
            instruction_role: config.instruction_role,
        }
    }
}

/// Embed, retrieve, assemble, generate. Each stage runs once, in order, and
/// any failure ends the run.
pub struct RagService {
    embedder: Embedder,
    index: Box<dyn VectorIndex>,
    generator: Box<dyn ChatGenerator>,
    settings: RagSettings,
}

impl RagService {
    pub fn new(
        embedder: Embedder,
        index: Box<dyn VectorIndex>,
        generator: Box<dyn ChatGenerator>,
        settings: RagSettings,
    ) -> Self {
        Self {
            embedder,
            index,
            generator,
            settings,
        }
    }

    /// Wire the HTTP clients described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let embedding_backend: Box<dyn TextEmbedder> = Box::new(OllamaClient::new(
            config.embedding_base_url.clone(),
            config.embedding_model.clone(),
        ));
        Self::new(
            Embedder::new(embedding_backend, config.embedding_dimension),
            Box::new(QdrantClient::new(
                config.qdrant_url.clone(),
                config.qdrant_api_key.clone(),
            )),
            Box::new(OpenAiClient::new(
                config.openai_base_url.clone(),
                config.openai_api_key.clone(),
            )),
            RagSettings::from_config(config),
        )
    }

    pub fn settings(&self) -> &RagSettings {
        &self.settings
    }

    pub async fn answer(&self, query: &Query) -> Result<RagAnswer> {
        let timer = Telemetry::new();
        let embedding = self
            .embedder
            .embed_query(query)
            .await
            .context("failed to embed query")?;
        debug!(elapsed_ms = timer.elapsed_ms() as u64, "embedding stage done");

        let timer = Telemetry::new();
        let request = SearchRequest {
            collection: self.settings.collection.clone(),
            limit: self.settings.limit,
            with_payload: true,
            score_threshold: self.settings.score_threshold,
        };
        let points = self
            .index
            .query_points(&request, &embedding.vector)
            .await
            .with_context(|| {
                format!("failed to query collection {:?}", self.settings.collection)
            })?;
        info!(
            collection = %self.settings.collection,
            points = points.len(),
            elapsed_ms = timer.elapsed_ms() as u64,
            "retrieved context"
        );

        let context = build_context(&points)?;
        let prompt = build_prompt(&context, query);
        let messages = build_messages(self.settings.instruction_role, prompt);
        debug!(context_chars = context.len(), "prompt assembled");

        let timer = Telemetry::new();
        let completion = self
            .generator
            .complete(&self.settings.chat_model, &messages)
            .await
            .context("completion request failed")?;
        info!(
            model = %self.settings.chat_model,
            elapsed_ms = timer.elapsed_ms() as u64,
            "completion received"
        );

        Ok(RagAnswer {
            points,
            context,
            messages,
            completion,
        })
    }

    pub async fn query(&self, question: &str) -> Result<String> {
        Ok(self.answer(&Query::new(question)).await?.completion)
    }
}
