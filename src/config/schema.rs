//! Configuration schema definitions.
//!
//! Every section derives Serde traits and defaults each field, so an empty
//! file (or no file at all) yields the stock development setup.

use serde::{Deserialize, Serialize};

/// Root configuration for the dev server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DevServerConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Asset Server the non-API traffic is forwarded to.
    pub upstream: UpstreamConfig,

    /// Mock API settings.
    pub mock: MockConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Upstream Asset Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Origin of the Asset Server (scheme + authority, no path).
    pub origin: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:3001".to_string(),
        }
    }
}

/// Mock API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MockConfig {
    /// Upper bound on a buffered move-issue request body, in bytes.
    pub max_move_body_bytes: usize,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            max_move_body_bytes: 1024 * 1024, // 1MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
