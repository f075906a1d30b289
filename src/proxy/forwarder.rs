//! Read-only asset proxy.
//!
//! # Responsibilities
//! - Translate the dev-server path to the Asset Server path
//! - Issue a plain GET upstream (method, headers and body are not forwarded)
//! - Relay upstream status and headers verbatim, stream the body through
//! - Map connection failures to 502 naming the expected origin
//!
//! Dropping the returned response (client went away) drops the upstream
//! body, which closes the upstream connection. No timeouts are applied.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{uri::InvalidUri, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;

use crate::http::response::text;
use crate::routing::rewrite::translate;

/// Errors raised while forwarding to the Asset Server.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("invalid upstream uri `{uri}`: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: InvalidUri,
    },

    #[error("asset server not available at {origin}: {source}")]
    Unavailable {
        origin: Arc<str>,
        #[source]
        source: hyper_util::client::legacy::Error,
    },
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match self {
            Self::Unavailable { origin, .. } => text(
                StatusCode::BAD_GATEWAY,
                format!("Bad Gateway - asset server not available at {origin}"),
            ),
            Self::InvalidUri { uri, .. } => text(
                StatusCode::BAD_GATEWAY,
                format!("Bad Gateway - cannot build upstream request for {uri}"),
            ),
        }
    }
}

/// Forwards non-API requests to the Asset Server.
#[derive(Clone)]
pub struct AssetForwarder {
    client: Client<HttpConnector, Body>,
    /// Origin as configured; used verbatim in diagnostics.
    origin: Arc<str>,
    /// Origin without a trailing slash, joined with translated paths.
    base: Arc<str>,
}

impl AssetForwarder {
    /// Create a forwarder for the given origin (e.g. `http://localhost:3001`).
    pub fn new(origin: &str) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            origin: Arc::from(origin),
            base: Arc::from(origin.trim_end_matches('/')),
        }
    }

    /// The configured upstream origin.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Full upstream URI for a dev-server path.
    pub fn upstream_uri(&self, path: &str) -> Result<Uri, ForwardError> {
        let uri = format!("{}{}", self.base, translate(path));
        uri.parse().map_err(|source| ForwardError::InvalidUri { uri, source })
    }

    /// Fetch `path` from the Asset Server and relay the response.
    pub async fn forward(&self, path: &str) -> Result<Response, ForwardError> {
        let uri = self.upstream_uri(path)?;

        tracing::debug!(path = %path, upstream = %uri, "Forwarding to asset server");

        let mut request = Request::new(Body::empty());
        *request.method_mut() = Method::GET;
        *request.uri_mut() = uri;

        let response = self.client.request(request).await.map_err(|source| {
            tracing::warn!(
                origin = %self.origin,
                path = %path,
                error = %source,
                "Proxy error"
            );
            ForwardError::Unavailable {
                origin: self.origin.clone(),
                source,
            }
        })?;

        let (parts, body) = response.into_parts();
        let origin = self.origin.clone();
        let body = body.map_err(move |e: hyper::Error| {
            tracing::warn!(origin = %origin, error = %e, "Upstream body aborted");
            e
        });

        Ok(Response::from_parts(parts, Body::new(body)))
    }
}
