use thiserror::Error;

/// Contract violations between pipeline stages and the services behind them.
#[derive(Debug, Error)]
pub enum RagError {
    #[error("embedding has {actual} dimensions, index expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding service returned {actual} rows for {expected} inputs")]
    EmbeddingRowCount { expected: usize, actual: usize },

    #[error("point {point_id} has no string `{field}` in its payload")]
    MissingPayloadField { point_id: String, field: String },

    #[error("completion response contained no choices")]
    NoChoices,

    #[error("{service} returned {status}: {body}")]
    Http {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{0} is not set")]
    MissingConfig(&'static str),
}
