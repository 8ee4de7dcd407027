// Connection handling module
// Serves a single accepted TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::assets::AssetStore;
use crate::handler;
use crate::logger;

/// Serve an accepted connection in a spawned task.
///
/// Wraps the stream in `TokioIo`, serves it with HTTP/1.1 keep-alive and
/// the SPA handler, and logs (but otherwise ignores) connection errors.
/// No timeout is applied; the connection lives until the peer closes it
/// or the process dies.
pub fn handle_connection(stream: TcpStream, store: Arc<dyn AssetStore>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let store = Arc::clone(&store);
                async move { handler::handle_request(req, store).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
