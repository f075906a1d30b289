//! Mock backend subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → dataset.rs (build once, validate)
//!     → Arc<MockDataset> in router state
//!
//! /wuffle/* request
//!     → routes.rs (exact/prefix route table)
//!     → handlers.rs (canned JSON, move acknowledgement)
//! ```

pub mod dataset;
pub mod handlers;
pub mod routes;

pub use dataset::{DatasetError, MockDataset};
pub use routes::MockRoute;
