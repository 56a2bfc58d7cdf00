//! Observability for the Tindahan storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured session logging (JSON or human-readable)
//! - `EventLogger` - A cart observer that logs every cart event
//! - `init_tracing` - Installs the global `tracing` subscriber

mod events;
mod logging;
mod subscriber;

pub use events::*;
pub use logging::*;
pub use subscriber::*;

// Re-export SessionId from tindahan-commerce for convenience
pub use tindahan_commerce::SessionId;
