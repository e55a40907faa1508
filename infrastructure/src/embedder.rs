use domain::error::RagError;
use domain::models::{Embedding, Query};
use domain::ports::TextEmbedder;
use shared::types::Result;
use tracing::debug;

/// Query-side embedding stage. Sends exactly one input and checks the
/// returned row against the index dimension.
pub struct Embedder {
    backend: Box<dyn TextEmbedder>,
    dimension: usize,
}

impl Embedder {
    pub fn new(backend: Box<dyn TextEmbedder>, dimension: usize) -> Self {
        Self { backend, dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub async fn embed_query(&self, query: &Query) -> Result<Embedding> {
        let inputs = [query.text().to_string()];
        let rows = self.backend.embed(&inputs).await?;
        if rows.len() != inputs.len() {
            return Err(RagError::EmbeddingRowCount {
                expected: inputs.len(),
                actual: rows.len(),
            }
            .into());
        }
        let vector = rows.into_iter().next().unwrap_or_default();
        if vector.len() != self.dimension {
            return Err(RagError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            }
            .into());
        }
        debug!(dimension = vector.len(), "query embedded");
        Ok(Embedding { vector })
    }
}
