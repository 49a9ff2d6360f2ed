//! # Application State
//!
//! Shared state for the Axum application, passed to route handlers via the
//! `State` extractor. Validation itself is stateless; the state carries only
//! configuration and the request counters.

use crate::middleware::metrics::ApiMetrics;

/// Default listen port, kept from the legacy validator service.
pub const DEFAULT_PORT: u16 = 8081;

/// Application configuration.
///
/// Custom `Debug` redacts the token value to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Static bearer token. If `None`, authentication is disabled.
    pub auth_token: Option<String>,
    /// Root schema used when a request names none.
    pub default_schema: Option<String>,
}

impl AppConfig {
    /// Build configuration from `PORT`, `AUTH_TOKEN`, and `DEFAULT_SCHEMA`.
    ///
    /// An unparsable `PORT` falls back to [`DEFAULT_PORT`]; empty values are
    /// treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            auth_token: non_empty("AUTH_TOKEN"),
            default_schema: non_empty("DEFAULT_SCHEMA"),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("default_schema", &self.default_schema)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            auth_token: None,
            default_schema: None,
        }
    }
}

/// Shared application state. Cloning is cheap; counters are shared.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: AppConfig,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Create state with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            metrics: ApiMetrics::new(),
        }
    }
}
