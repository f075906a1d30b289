//! Asset Server forwarding.
//!
//! # Data Flow
//! ```text
//! non-API request path
//!     → routing::rewrite (mount translation, default document)
//!     → forwarder.rs (GET upstream, relay status/headers, stream body)
//!     → 502 text/plain when the Asset Server is unreachable
//! ```

pub mod forwarder;

pub use forwarder::{AssetForwarder, ForwardError};
