//! Self-contained SPA server.
//!
//! Embeds the application bundle at compile time, binds an OS-assigned
//! ephemeral port, prints loopback and LAN URLs, opens the default browser,
//! and serves HTTP with SPA-fallback resolution until killed.

pub mod assets;
pub mod handler;
pub mod http;
pub mod launcher;
pub mod logger;
pub mod server;
