//! Configuration validation.
//!
//! Serde handles the syntax; this module checks the values make sense before
//! the server binds anything. All problems are reported, not just the first.

use std::net::SocketAddr;

use axum::http::Uri;
use thiserror::Error;

use crate::config::schema::DevServerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    InvalidBindAddress(String),

    #[error("upstream.origin `{origin}` is invalid: {reason}")]
    InvalidOrigin { origin: String, reason: &'static str },

    #[error("mock.max_move_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.metrics_address `{0}` is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &DevServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(reason) = check_origin(&config.upstream.origin) {
        errors.push(ValidationError::InvalidOrigin {
            origin: config.upstream.origin.clone(),
            reason,
        });
    }

    if config.mock.max_move_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The origin is joined with request paths verbatim, so it must be a bare
/// `http://host[:port]`.
fn check_origin(origin: &str) -> Result<(), &'static str> {
    let uri: Uri = origin.parse().map_err(|_| "not a valid URI")?;

    if uri.scheme_str() != Some("http") {
        return Err("scheme must be http");
    }
    if uri.authority().is_none() {
        return Err("missing host");
    }
    if !matches!(uri.path(), "" | "/") || uri.query().is_some() || origin.contains('#') {
        return Err("must not carry a path, query or fragment");
    }
    Ok(())
}
