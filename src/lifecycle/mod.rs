//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → wait resolves → server stops accepting → in-flight requests finish
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::{shutdown_on_signal, wait_for_signal};
