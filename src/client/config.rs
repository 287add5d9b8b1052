use std::env;
use std::time::Duration;

use url::Url;

use crate::client::error::ConfigError;
use crate::client::models::ui_state::ThemeMode;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8084;
// The backend route really is spelled this way.
pub const DEFAULT_ENDPOINT_PATH: &str = "/databse_copilot";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub backend_scheme: String,
    pub backend_host: String,
    pub backend_port: u16,
    pub endpoint_path: String,
    /// `None` means a hung backend keeps the request in flight forever.
    pub request_timeout: Option<Duration>,
    pub theme: ThemeMode,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Values that do not
    /// parse fall back to their defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            backend_scheme: var("COPILOT_BACKEND_SCHEME").unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            backend_host: var("COPILOT_BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            backend_port: var("COPILOT_BACKEND_PORT").and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT),
            endpoint_path: var("COPILOT_ENDPOINT_PATH").unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string()),
            request_timeout: var("COPILOT_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            theme: var("COPILOT_THEME").and_then(|v| v.parse().ok()).unwrap_or_default(),
            log_level: var("COPILOT_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let path = self.endpoint_path.trim();
        let raw = if path.starts_with('/') {
            format!("{}://{}:{}{}", self.backend_scheme, self.backend_host, self.backend_port, path)
        } else {
            format!("{}://{}:{}/{}", self.backend_scheme, self.backend_host, self.backend_port, path)
        };
        Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint { url: raw, source })
    }

    /// `RUST_LOG` still wins; `log_level` is only the fallback filter.
    pub fn init_logger(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_target_the_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint_url().unwrap().as_str(), "http://localhost:8084/databse_copilot");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("COPILOT_BACKEND_HOST", "10.0.0.7"),
            ("COPILOT_BACKEND_PORT", "8080"),
            ("COPILOT_ENDPOINT_PATH", "/api/query"),
            ("COPILOT_REQUEST_TIMEOUT_SECS", "30"),
            ("COPILOT_THEME", "Dark"),
        ]);
        assert_eq!(config.endpoint_url().unwrap().as_str(), "http://10.0.0.7:8080/api/query");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = config_from(&[
            ("COPILOT_BACKEND_PORT", "eighty"),
            ("COPILOT_REQUEST_TIMEOUT_SECS", "0"),
            ("COPILOT_THEME", "solarized"),
        ]);
        assert_eq!(config.backend_port, DEFAULT_PORT);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn path_without_leading_slash() {
        let config = config_from(&[("COPILOT_ENDPOINT_PATH", "databse_copilot")]);
        assert_eq!(config.endpoint_url().unwrap().path(), "/databse_copilot");
    }

    #[test]
    fn invalid_host_is_rejected() {
        let config = config_from(&[("COPILOT_BACKEND_HOST", "bad host")]);
        assert!(matches!(config.endpoint_url(), Err(ConfigError::InvalidEndpoint { .. })));
    }
}
