// Server loop module
// Accepts connections forever and dispatches each to the SPA handler

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::assets::AssetStore;
use crate::logger;

/// Run the accept loop until the process is killed.
///
/// The store is an explicit handler object rather than process-wide state,
/// so multiple independent instances can run in one process (the tests do
/// exactly that). Accept errors are logged and the loop keeps going; there
/// is no graceful shutdown.
pub async fn start_server_loop(
    listener: TcpListener,
    store: Arc<dyn AssetStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                handle_connection(stream, Arc::clone(&store));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
