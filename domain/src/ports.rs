use async_trait::async_trait;
use shared::types::Result;
use std::sync::Arc;

use crate::models::{RetrievedPoint, SearchRequest};
use crate::session::Message;

/// Text embedding backend: one output row per input string.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Nearest-neighbour search over a stored collection. Results are ordered by
/// descending score and hold at most `request.limit` points.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn query_points(
        &self,
        request: &SearchRequest,
        vector: &[f32],
    ) -> Result<Vec<RetrievedPoint>>;
}

/// Chat completion endpoint returning the first choice's content.
#[async_trait]
pub trait ChatGenerator: Send + Sync {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String>;
}

#[async_trait]
impl<T: TextEmbedder + ?Sized> TextEmbedder for Arc<T> {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>> {
        (**self).embed(inputs).await
    }
}

#[async_trait]
impl<T: VectorIndex + ?Sized> VectorIndex for Arc<T> {
    async fn query_points(
        &self,
        request: &SearchRequest,
        vector: &[f32],
    ) -> Result<Vec<RetrievedPoint>> {
        (**self).query_points(request, vector).await
    }
}

#[async_trait]
impl<T: ChatGenerator + ?Sized> ChatGenerator for Arc<T> {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String> {
        (**self).complete(model, messages).await
    }
}
