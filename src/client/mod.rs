pub mod config;
pub mod error;
pub mod gui;
pub mod models;
pub mod services;

pub use config::ClientConfig;
pub use error::{ConfigError, QueryError};
