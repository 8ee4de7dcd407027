//! Network bootstrap and serving loop.
//!
//! Binds the ephemeral listener, discovers the LAN address, and runs the
//! accept loop until the process is killed.

pub mod connection;
pub mod lan;
pub mod listener;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used types
pub use lan::discover_lan_host;
pub use listener::bind_ephemeral;
pub use server_loop::start_server_loop;
