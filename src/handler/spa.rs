//! SPA-fallback resolution.
//!
//! Maps a request path to either the named bundled asset or the root
//! document. Any path the store cannot resolve falls back to `index.html`
//! so client-side routing can take over.

use crate::assets::{AssetStore, ROOT_DOCUMENT};
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult};
use chrono::Utc;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;

/// Resolve a request against the asset store.
///
/// The empty path and any path the store does not contain both serve the
/// root document; everything else is served as a plain static asset with
/// `ETag` and Range support.
pub fn resolve(ctx: &RequestContext<'_>, store: &dyn AssetStore) -> Response<Full<Bytes>> {
    let path = ctx.path.strip_prefix('/').unwrap_or(ctx.path);

    if path.is_empty() {
        return serve_root_document(ctx, store);
    }

    // Store keys are literal names; decode the URL path before lookup so
    // assets with spaces or non-ASCII names resolve. Undecodable paths
    // cannot name any asset and take the fallback.
    let Ok(path) = urlencoding::decode(path) else {
        return serve_root_document(ctx, store);
    };

    match store.read(&path) {
        Some(content) => serve_asset(ctx, &path, &content),
        None => serve_root_document(ctx, store),
    }
}

/// Serve the root document with a fresh `Last-Modified` timestamp.
///
/// 404 here means the bundle shipped without `index.html`; the request
/// fails but the server keeps running.
fn serve_root_document(ctx: &RequestContext<'_>, store: &dyn AssetStore) -> Response<Full<Bytes>> {
    let Some(content) = store.read(ROOT_DOCUMENT) else {
        return http::build_404_response();
    };

    let last_modified = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
    http::response::build_root_document_response(
        Bytes::from(content.into_owned()),
        &last_modified,
        ctx.is_head,
    )
}

/// Serve a directly resolved asset with `ETag` and Range support
fn serve_asset(ctx: &RequestContext<'_>, path: &str, data: &[u8]) -> Response<Full<Bytes>> {
    let content_type = mime::get_content_type(Path::new(path).extension().and_then(|e| e.to_str()));
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    // Check if client has cached version
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    // Check for Range request
    match http::parse_range_header(ctx.range_header.as_deref(), total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data[start..=end].to_vec())
            };

            return http::response::build_partial_response(
                body,
                content_type,
                &etag,
                start,
                end,
                total_size,
                ctx.is_head,
            );
        }
        RangeParseResult::NotSatisfiable => {
            return http::build_416_response(total_size);
        }
        RangeParseResult::None => {
            // No Range header or malformed, return full content
        }
    }

    http::response::build_cached_response(
        Bytes::from(data.to_owned()),
        content_type,
        &etag,
        ctx.is_head,
    )
}
