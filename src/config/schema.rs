//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the console router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Access token storage.
    pub session: SessionConfig,

    /// Navigation guard behaviour.
    pub guard: GuardConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Session storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File holding the remembered access token (JSON).
    pub token_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_path: ".console/session.json".to_string(),
        }
    }
}

/// What the guard assumes when the auth check itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthFailurePolicy {
    /// Abort the navigation with the auth error.
    Propagate,
    /// Treat the session as unauthorized.
    #[default]
    Unauthorized,
    /// Treat the session as authorized.
    Authorized,
}

/// Navigation guard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Behaviour when the auth check fails.
    pub auth_failure: AuthFailurePolicy,

    /// Maximum redirects followed within one navigation.
    pub max_redirects: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            auth_failure: AuthFailurePolicy::default(),
            max_redirects: 8,
        }
    }
}
