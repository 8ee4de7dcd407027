//! Request dispatch.
//!
//! Entry point for HTTP request processing: validates the method, extracts
//! the headers the asset path cares about, and hands off to the resolver.

use crate::assets::AssetStore;
use crate::handler::spa;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    store: Arc<dyn AssetStore>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();

    // Only GET and HEAD exist on this surface
    if !matches!(*method, Method::GET | Method::HEAD) {
        return Ok(http::build_405_response());
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *method == Method::HEAD,
        if_none_match: header_value(&req, "if-none-match"),
        range_header: header_value(&req, "range"),
    };

    Ok(spa::resolve(&ctx, store.as_ref()))
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
