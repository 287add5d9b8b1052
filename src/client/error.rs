use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// The only message a user ever sees for a failed query.
pub const FAILURE_MESSAGE: &str = "Failed to fetch response. Ensure the backend is running.";

/// Why a single query round-trip failed.
///
/// `Clone` so the result can travel inside GUI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The backend answered with a non-success status. The body is not read.
    #[error("HTTP error! Status: {0}")]
    Status(StatusCode),
    /// The request never completed, or the success body could not be decoded.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl QueryError {
    /// 4xx and 5xx are deliberately reported the same way.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display hides the io/dns cause, keep the whole chain for the log
        let mut detail = err.to_string();
        let mut source = StdError::source(&err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        QueryError::Transport(detail)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend endpoint `{url}`: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
