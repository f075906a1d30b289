//! Top-level request classification.
//!
//! The only decision made here is which side of the server owns a path;
//! method, headers and body are never consulted.

/// Namespace claimed entirely by the mock API. Never forwarded upstream.
pub const API_PREFIX: &str = "/wuffle/";

/// Which handler owns a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Answered from the mock dataset.
    MockApi,
    /// Forwarded to the Asset Server.
    Asset,
}

impl Dispatch {
    /// Label used in logs and metrics.
    pub fn kind(self) -> &'static str {
        match self {
            Self::MockApi => "mock",
            Self::Asset => "asset",
        }
    }
}

/// Classify a query-less request path.
pub fn classify(path: &str) -> Dispatch {
    if path.starts_with(API_PREFIX) {
        Dispatch::MockApi
    } else {
        Dispatch::Asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_prefix_is_mock() {
        assert_eq!(classify("/wuffle/board"), Dispatch::MockApi);
        assert_eq!(classify("/wuffle/"), Dispatch::MockApi);
        assert_eq!(classify("/wuffle/anything/else"), Dispatch::MockApi);
    }

    #[test]
    fn test_everything_else_is_asset() {
        assert_eq!(classify("/"), Dispatch::Asset);
        assert_eq!(classify("/board/"), Dispatch::Asset);
        assert_eq!(classify("/wuffle"), Dispatch::Asset);
        assert_eq!(classify("/wufflex/board"), Dispatch::Asset);
        assert_eq!(classify("/static/wuffle/board"), Dispatch::Asset);
    }
}
