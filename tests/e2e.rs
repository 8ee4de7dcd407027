//! End-to-end serving tests.
//!
//! Each test binds a real ephemeral listener, runs the full serving loop,
//! and speaks raw HTTP/1.1 over a TCP stream.

use std::net::SocketAddr;
use std::sync::Arc;

use spaserve::assets::{AssetStore, BundledAssets};
use spaserve::server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const INDEX_HTML: &[u8] = include_bytes!("../web/dist/index.html");
const APP_JS: &[u8] = include_bytes!("../web/dist/assets/app.js");

struct HttpReply {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl HttpReply {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Start a full server instance on an ephemeral port.
async fn spawn_server() -> SocketAddr {
    let (listener, addr) = server::bind_ephemeral().unwrap();
    let store: Arc<dyn AssetStore> = Arc::new(BundledAssets);
    tokio::spawn(async move {
        let _ = server::start_server_loop(listener, store).await;
    });
    addr
}

/// Issue a single request and read the full response.
async fn send(addr: SocketAddr, request: &str) -> HttpReply {
    let mut stream = TcpStream::connect(("127.0.0.1", addr.port())).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("missing header terminator");
    let head = String::from_utf8(raw[..split].to_vec()).unwrap();
    let body = raw[split + 4..].to_vec();

    let mut lines = head.lines();
    let status_line = lines.next().expect("missing status line");
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("missing status code");
    let headers = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect();

    HttpReply {
        status,
        headers,
        body,
    }
}

async fn get(addr: SocketAddr, path: &str) -> HttpReply {
    send(
        addr,
        &format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"),
    )
    .await
}

#[tokio::test]
async fn root_serves_bundled_index() {
    let addr = spawn_server().await;
    let reply = get(addr, "/").await;

    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.header("content-type"),
        Some("text/html; charset=utf-8")
    );
    assert!(reply.header("last-modified").is_some());
    assert_eq!(reply.body, INDEX_HTML);
}

#[tokio::test]
async fn unknown_path_falls_back_to_index_not_404() {
    let addr = spawn_server().await;
    let reply = get(addr, "/nonexistent/path.js").await;

    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.header("content-type"),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(reply.body, INDEX_HTML);
}

#[tokio::test]
async fn bundled_asset_served_with_exact_bytes_and_type() {
    let addr = spawn_server().await;
    let reply = get(addr, "/assets/app.js").await;

    assert_eq!(reply.status, 200);
    assert_eq!(reply.header("content-type"), Some("application/javascript"));
    assert!(reply.header("etag").is_some());
    assert_eq!(reply.body, APP_JS);
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let addr = spawn_server().await;
    let first = get(addr, "/some/client/route").await;
    let second = get(addr, "/some/client/route").await;

    assert_eq!(first.status, 200);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn two_instances_serve_independently() {
    let addr_a = spawn_server().await;
    let addr_b = spawn_server().await;
    assert_ne!(addr_a.port(), addr_b.port());

    let reply_a = get(addr_a, "/").await;
    let reply_b = get(addr_b, "/").await;
    assert_eq!(reply_a.status, 200);
    assert_eq!(reply_b.status, 200);
    assert_eq!(reply_a.body, reply_b.body);
}

#[tokio::test]
async fn head_reports_full_length_with_empty_body() {
    let addr = spawn_server().await;
    let reply = send(
        addr,
        "HEAD /assets/app.js HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert_eq!(reply.status, 200);
    assert_eq!(reply.header("content-type"), Some("application/javascript"));
    assert_eq!(
        reply.header("content-length"),
        Some(APP_JS.len().to_string().as_str())
    );
    assert!(reply.body.is_empty());
}

#[tokio::test]
async fn range_request_served_partially_over_the_wire() {
    let addr = spawn_server().await;
    let reply = send(
        addr,
        "GET /assets/app.js HTTP/1.1\r\nHost: localhost\r\nRange: bytes=0-4\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert_eq!(reply.status, 206);
    assert_eq!(
        reply.header("content-range"),
        Some(format!("bytes 0-4/{}", APP_JS.len()).as_str())
    );
    assert_eq!(reply.body, &APP_JS[0..=4]);
}

#[tokio::test]
async fn post_is_rejected_with_405() {
    let addr = spawn_server().await;
    let reply = send(
        addr,
        "POST / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\nContent-Length: 0\r\n\r\n",
    )
    .await;

    assert_eq!(reply.status, 405);
    assert_eq!(reply.header("allow"), Some("GET, HEAD"));
}
