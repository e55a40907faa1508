use async_trait::async_trait;
use domain::error::RagError;
use domain::models::{PointId, RetrievedPoint, SearchRequest};
use domain::ports::VectorIndex;
use serde_json::{Map, Value};
use shared::types::Result;

#[derive(Debug, Clone)]
struct StoredPoint {
    id: PointId,
    vector: Vec<f32>,
    payload: Map<String, Value>,
}

/// Brute-force cosine index held in memory. Ignores the collection name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIndex {
    points: Vec<StoredPoint>,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PointId, vector: Vec<f32>, payload: Map<String, Value>) {
        self.points.push(StoredPoint {
            id,
            vector,
            payload,
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot_product / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorIndex for InMemoryIndex {
    async fn query_points(
        &self,
        request: &SearchRequest,
        vector: &[f32],
    ) -> Result<Vec<RetrievedPoint>> {
        if let Some(p) = self.points.iter().find(|p| p.vector.len() != vector.len()) {
            return Err(RagError::DimensionMismatch {
                expected: p.vector.len(),
                actual: vector.len(),
            }
            .into());
        }

        let mut scored: Vec<(f32, &StoredPoint)> = self
            .points
            .iter()
            .map(|p| (Self::cosine_similarity(vector, &p.vector), p))
            .filter(|(score, _)| request.score_threshold.map_or(true, |t| *score >= t))
            .collect();

        // Stable sort keeps insertion order among equal scores.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(usize::try_from(request.limit).unwrap_or(usize::MAX))
            .map(|(score, p)| RetrievedPoint {
                id: p.id.clone(),
                score,
                payload: if request.with_payload {
                    p.payload.clone()
                } else {
                    Map::new()
                },
            })
            .collect())
    }
}
