//! Recording fakes for the three pipeline ports.

use anyhow::anyhow;
use application::rag_service::{RagService, RagSettings};
use async_trait::async_trait;
use domain::conventions::EMBEDDING_DIMENSION;
use domain::models::{PointId, RetrievedPoint, SearchRequest};
use domain::ports::{ChatGenerator, TextEmbedder, VectorIndex};
use domain::session::{Message, Role};
use infrastructure::embedder::Embedder;
use serde_json::{json, Map};
use shared::types::Result;
use std::sync::{Arc, Mutex};

pub struct FakeEmbedder {
    pub dimension: usize,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeEmbedder {
    pub fn new(dimension: usize) -> Arc<Self> {
        Arc::new(Self {
            dimension,
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextEmbedder for FakeEmbedder {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>> {
        self.calls.lock().unwrap().push(inputs.to_vec());
        Ok(inputs.iter().map(|_| vec![0.1; self.dimension]).collect())
    }
}

/// Returns canned points, truncated to the requested limit.
pub struct FakeIndex {
    pub points: Vec<RetrievedPoint>,
    pub fail: bool,
    pub requests: Mutex<Vec<(SearchRequest, usize)>>,
}

impl FakeIndex {
    pub fn with_docs(docs: &[&str]) -> Arc<Self> {
        let points = docs
            .iter()
            .enumerate()
            .map(|(i, doc)| doc_point(i as u64, doc, 1.0 - i as f32 * 0.1))
            .collect();
        Self::with_points(points)
    }

    pub fn with_points(points: Vec<RetrievedPoint>) -> Arc<Self> {
        Arc::new(Self {
            points,
            fail: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            points: Vec::new(),
            fail: true,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl VectorIndex for FakeIndex {
    async fn query_points(
        &self,
        request: &SearchRequest,
        vector: &[f32],
    ) -> Result<Vec<RetrievedPoint>> {
        self.requests
            .lock()
            .unwrap()
            .push((request.clone(), vector.len()));
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        Ok(self
            .points
            .iter()
            .take(request.limit as usize)
            .cloned()
            .collect())
    }
}

pub struct FakeGenerator {
    pub reply: String,
    pub calls: Mutex<Vec<(String, Vec<Message>)>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ChatGenerator for FakeGenerator {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));
        Ok(self.reply.clone())
    }
}

pub fn doc_point(id: u64, doc: &str, score: f32) -> RetrievedPoint {
    let mut payload = Map::new();
    payload.insert("doc".to_string(), json!(doc));
    RetrievedPoint {
        id: PointId::Num(id),
        score,
        payload,
    }
}

pub fn settings() -> RagSettings {
    RagSettings {
        collection: "knowledge_repo_768".to_string(),
        limit: 10,
        score_threshold: None,
        chat_model: "meta-llama/Llama-3.2-1B-Instruct".to_string(),
        instruction_role: Role::Developer,
    }
}

pub fn service(
    embedder: &Arc<FakeEmbedder>,
    index: &Arc<FakeIndex>,
    generator: &Arc<FakeGenerator>,
) -> RagService {
    RagService::new(
        Embedder::new(Box::new(embedder.clone()), EMBEDDING_DIMENSION),
        Box::new(index.clone()),
        Box::new(generator.clone()),
        settings(),
    )
}
