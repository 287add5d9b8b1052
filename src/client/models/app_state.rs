use log::{debug, error};

use crate::client::error::QueryError;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{Panel, ThemeMode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryOutcome {
    #[default]
    Idle,
    Success(String),
    /// `message` is the user-facing text, never the raw failure. The last
    /// answer is kept underneath and comes back on the next submit.
    Failure {
        message: String,
        last_response: Option<String>,
    },
}

/// State of the query page. Only `submit` and `complete` move the lifecycle.
#[derive(Debug, Clone, Default)]
pub struct QueryAppState {
    pub query: String,
    pub outcome: QueryOutcome,
    pub busy: bool,
    pub theme: ThemeMode,
}

impl QueryAppState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Starts a submission and returns the trimmed text to send.
    ///
    /// Blank input returns `None` and leaves the state untouched. A running
    /// request does not block a new one.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let trimmed = trimmed.to_string();

        self.busy = true;
        // clearing the error uncovers whatever answer was there before it
        self.outcome = match std::mem::take(&mut self.outcome) {
            QueryOutcome::Failure { last_response: Some(response), .. } => QueryOutcome::Success(response),
            QueryOutcome::Failure { last_response: None, .. } => QueryOutcome::Idle,
            other => other,
        };
        Some(trimmed)
    }

    /// Records the end of a request. Whatever completes last overwrites the outcome.
    pub fn complete(&mut self, result: Result<String, QueryError>) {
        self.busy = false;
        self.outcome = match result {
            Ok(response) => {
                debug!("[QUERY] received response ({} chars)", response.len());
                QueryOutcome::Success(response)
            }
            Err(err) => {
                error!("[QUERY] Error fetching data: {}", err);
                QueryOutcome::Failure {
                    message: err.user_message().to_string(),
                    last_response: self.response().map(str::to_string),
                }
            }
        };
    }

    /// Last answer received, even while an error is displayed over it.
    pub fn response(&self) -> Option<&str> {
        match &self.outcome {
            QueryOutcome::Idle => None,
            QueryOutcome::Success(response) => Some(response),
            QueryOutcome::Failure { last_response, .. } => last_response.as_deref(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            QueryOutcome::Failure { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn panel(&self) -> Panel<'_> {
        match &self.outcome {
            QueryOutcome::Idle => Panel::Empty,
            QueryOutcome::Success(response) => Panel::Response(response),
            QueryOutcome::Failure { message, .. } => Panel::Error(message),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.busy
    }

    /// What Enter in the input field sends: the same as the button, nothing while busy.
    pub fn submit_message(&self) -> Message {
        if self.can_submit() {
            Message::SubmitQuery
        } else {
            Message::NoOp
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy { "Loading..." } else { "Run Query" }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
