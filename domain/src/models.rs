use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::conventions::as_search_query;
use crate::session::Message;

/// A question, tagged with the query marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(question: &str) -> Self {
        Self {
            text: as_search_query(question),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub vector: Vec<f32>,
}

impl Embedding {
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// Qdrant accepts unsigned integers and UUID strings as point ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(String),
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::Num(n) => write!(f, "{n}"),
            PointId::Uuid(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPoint {
    pub id: PointId,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// Parameters of one nearest-neighbour search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub collection: String,
    pub limit: u64,
    pub with_payload: bool,
    pub score_threshold: Option<f32>,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct RagAnswer {
    pub points: Vec<RetrievedPoint>,
    pub context: String,
    pub messages: Vec<Message>,
    pub completion: String,
}
