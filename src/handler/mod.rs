//! Request handling.
//!
//! Method validation and SPA-fallback resolution against the embedded
//! asset store.

pub mod router;
pub mod spa;

// Re-export main entry point
pub use router::handle_request;
