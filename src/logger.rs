//! Logger module
//!
//! Console logging for server lifecycle and error events. Individual
//! requests are intentionally not logged.

/// Print the startup banner with both reachable URLs.
pub fn log_server_start(local_url: &str, lan_url: &str) {
    println!("======================================");
    println!("SPA server started successfully");
    println!("Local:   {local_url}");
    println!("Network: {lan_url}");
    println!("======================================\n");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
