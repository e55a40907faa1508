use serde_json::Value;
use shared::types::Result;

use crate::conventions::{strip_document_prefix, DOC_PAYLOAD_FIELD};
use crate::error::RagError;
use crate::models::{Query, RetrievedPoint};
use crate::session::{Message, Role};

pub const PROMPT_INSTRUCTION: &str =
    "Use the following pieces of context to answer the question at the end.";

pub const ASSISTANT_INSTRUCTION: &str = "You are a helpful assistant.";

/// Stored passage text of a point, ingestion marker removed.
pub fn document_text(point: &RetrievedPoint) -> Result<&str> {
    match point.payload.get(DOC_PAYLOAD_FIELD) {
        Some(Value::String(doc)) => Ok(strip_document_prefix(doc)),
        _ => Err(RagError::MissingPayloadField {
            point_id: point.id.to_string(),
            field: DOC_PAYLOAD_FIELD.to_string(),
        }
        .into()),
    }
}

/// Space-joined passages in retrieval order.
pub fn build_context(points: &[RetrievedPoint]) -> Result<String> {
    let docs = points
        .iter()
        .map(document_text)
        .collect::<Result<Vec<_>>>()?;
    Ok(docs.join(" "))
}

pub fn build_prompt(context: &str, query: &Query) -> String {
    format!(
        "{PROMPT_INSTRUCTION}\n    {context}\n    Question: {}\n",
        query.text()
    )
}

pub fn build_messages(instruction_role: Role, prompt: String) -> Vec<Message> {
    vec![
        Message::new(instruction_role, ASSISTANT_INSTRUCTION),
        Message::new(Role::User, prompt),
    ]
}
