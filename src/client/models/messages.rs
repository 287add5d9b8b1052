use crate::client::error::QueryError;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp, // returned by on_submit while a query is running
    QueryChanged(String),
    SubmitQuery,
    QueryCompleted(Result<String, QueryError>),
    ToggleTheme,
}
