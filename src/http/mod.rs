//! HTTP protocol layer.
//!
//! Protocol-level helpers shared by the asset-serving path, decoupled from
//! the resolver's routing decisions.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used types
pub use range::parse_range_header;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_416_response,
};
