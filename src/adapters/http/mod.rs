//! HTTP adapters - REST API implementations.

pub mod payments;

// Re-export key types for convenience
pub use payments::{api_router, PaymentsAppState};
