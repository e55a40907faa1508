//! Text-tagging convention of the nomic-embed-text family.
//!
//! The model was trained with task prefixes: questions are embedded as
//! `search_query: ...` and stored passages as `search_document: ...`.
//! Both sides must use the literal markers or retrieval quality silently
//! degrades, so they live here rather than inline.

/// Marker prepended to query text before embedding.
pub const SEARCH_QUERY_PREFIX: &str = "search_query: ";

/// Marker stored in front of every ingested passage.
pub const SEARCH_DOCUMENT_PREFIX: &str = "search_document: ";

/// Vector length of the index the pipeline queries.
pub const EMBEDDING_DIMENSION: usize = 768;

/// Default top-K for retrieval.
pub const DEFAULT_RETRIEVAL_LIMIT: u64 = 10;

/// Payload field holding the stored passage text.
pub const DOC_PAYLOAD_FIELD: &str = "doc";

/// Question used when the caller supplies none.
pub const DEFAULT_QUESTION: &str = "how can I deprecate probably?";

/// Tag `text` as a query, leaving already-tagged text alone.
pub fn as_search_query(text: &str) -> String {
    if text.starts_with(SEARCH_QUERY_PREFIX) {
        text.to_string()
    } else {
        format!("{SEARCH_QUERY_PREFIX}{text}")
    }
}

/// Remove the ingestion marker if present; untagged text passes through.
pub fn strip_document_prefix(text: &str) -> &str {
    text.strip_prefix(SEARCH_DOCUMENT_PREFIX).unwrap_or(text)
}
