use domain::error::RagError;
use reqwest::Response;
use shared::types::Result;
use std::fmt::Display;

/// Turn a non-2xx response into a `RagError::Http` carrying the body.
pub(crate) async fn ensure_success(service: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = describe_body(response.text().await);
    Err(RagError::Http {
        service,
        status: status.as_u16(),
        body,
    }
    .into())
}

fn describe_body<E: Display>(read: std::result::Result<String, E>) -> String {
    read.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}
