//! Embedded asset store.
//!
//! The application bundle is compiled into the binary with `rust-embed`.
//! Assets are keyed by slash-separated relative paths, are immutable, and
//! live for the whole process, so concurrent readers need no locking.

use rust_embed::Embed;
use std::borrow::Cow;

/// Root document served for every path the store cannot resolve.
pub const ROOT_DOCUMENT: &str = "index.html";

#[derive(Embed)]
#[folder = "web/dist/"]
struct Assets;

/// Read-only source of bundled assets.
///
/// The serving loop takes the store as a trait object so tests can run the
/// resolver against synthetic bundles (including one with no root document).
pub trait AssetStore: Send + Sync + 'static {
    /// Full content of the asset at `path`, if one exists.
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>>;

    /// Whether an asset exists at `path`. Directory paths never match:
    /// the store holds files only.
    fn contains(&self, path: &str) -> bool {
        self.read(path).is_some()
    }
}

/// The production store backed by the compile-time bundle.
pub struct BundledAssets;

impl AssetStore for BundledAssets {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        Assets::get(path).map(|file| file.data)
    }
}
