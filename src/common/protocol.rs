use serde::{Deserialize, Serialize};

/// Body of the POST sent to the copilot backend.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// Successful answer from the backend. Any extra field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}
