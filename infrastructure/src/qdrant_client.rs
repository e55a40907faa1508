use async_trait::async_trait;
use domain::models::{RetrievedPoint, SearchRequest};
use domain::ports::VectorIndex;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use shared::types::Result;
use shared::utils::join_url;
use std::sync::Arc;
use tracing::debug;

use crate::http::ensure_success;

#[derive(Serialize)]
struct QueryPointsRequest<'a> {
    query: &'a [f32],
    limit: u64,
    with_payload: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    score_threshold: Option<f32>,
}

#[derive(Deserialize)]
struct QueryPointsResponse {
    result: QueryPointsResult,
}

#[derive(Deserialize)]
struct QueryPointsResult {
    #[serde(default)]
    points: Vec<RetrievedPoint>,
}

/// Qdrant REST client for the universal `points/query` endpoint.
#[derive(Clone)]
pub struct QdrantClient {
    client: Arc<Client>,
    url: String,
    api_key: Option<String>,
}

impl QdrantClient {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            url: url.into(),
            api_key,
        }
    }

    fn query_url(&self, collection: &str) -> String {
        join_url(&self.url, &format!("collections/{collection}/points/query"))
    }

    fn query_request(&self, request: &SearchRequest, vector: &[f32]) -> RequestBuilder {
        let body = QueryPointsRequest {
            query: vector,
            limit: request.limit,
            with_payload: request.with_payload,
            score_threshold: request.score_threshold,
        };
        let builder = self
            .client
            .post(self.query_url(&request.collection))
            .json(&body);
        match &self.api_key {
            Some(key) => builder.header("api-key", key),
            None => builder,
        }
    }
}

#[async_trait]
impl VectorIndex for QdrantClient {
    async fn query_points(
        &self,
        request: &SearchRequest,
        vector: &[f32],
    ) -> Result<Vec<RetrievedPoint>> {
        debug!(collection = %request.collection, limit = request.limit, "querying points");
        let builder = self.query_request(request, vector);
        let response = ensure_success("vector index", builder.send().await?).await?;
        let parsed: QueryPointsResponse = response.json().await?;
        Ok(parsed.result.points)
    }
}
