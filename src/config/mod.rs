//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     ← optional TOML file (loader.rs)
//!     ← command-line overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → DevServerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; the stock setup needs no file
//! - The reserved API prefix and the `/board` mount are not configurable
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DevServerConfig, ListenerConfig, MockConfig, ObservabilityConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
