//! Board Dev Server Library
//!
//! Local development façade for the board frontend: answers the `/wuffle/*`
//! API from an in-memory mock dataset and reverse-proxies everything else to
//! the Asset Server (the bundler's dev server).

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mock;
pub mod observability;
pub mod proxy;
pub mod routing;

pub use config::DevServerConfig;
pub use http::DevServer;
pub use lifecycle::Shutdown;
pub use mock::MockDataset;
