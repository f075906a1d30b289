//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query stripped)
//!     → dispatch.rs (reserved prefix? mock : asset)
//!     → mock side:  mock::routes resolves the endpoint
//!     → asset side: rewrite.rs translates the path for the Asset Server
//! ```
//!
//! # Design Decisions
//! - Prefix checks only, no regex
//! - Rule tables are static and ordered; first match wins
//! - Deterministic: same path always takes the same branch

pub mod dispatch;
pub mod rewrite;

pub use dispatch::{classify, Dispatch, API_PREFIX};
pub use rewrite::{translate, RewriteRule};
