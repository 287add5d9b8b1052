use std::time::Duration;

use log::debug;
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::error::{ConfigError, QueryError};
use crate::common::protocol::{QueryRequest, QueryResponse};

/// Talks to the copilot backend. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CopilotService {
    http: reqwest::Client,
    endpoint: Url,
}

impl CopilotService {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::with_endpoint(config.endpoint_url()?, config.request_timeout)
    }

    pub fn with_endpoint(endpoint: Url, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one `{"query": ...}` POST and returns the backend's `response` text.
    ///
    /// No retries. A non-success status is reported without reading the body.
    pub async fn query(&self, query: &str) -> Result<String, QueryError> {
        debug!("[COPILOT_SERVICE] POST {} ({} chars)", self.endpoint, query.len());
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(&QueryRequest { query })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(QueryError::Status(status));
        }

        let payload: QueryResponse = res.json().await?;
        debug!("[COPILOT_SERVICE] {} -> {} chars", status, payload.response.len());
        Ok(payload.response)
    }
}
