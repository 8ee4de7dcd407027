use std::sync::Arc;

use spaserve::assets::{AssetStore, BundledAssets};
use spaserve::{launcher, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    // Bind failure is fatal: a listener-less server must not keep running
    let (listener, addr) = server::bind_ephemeral()?;

    let local_url = format!("http://localhost:{}", addr.port());
    let lan_url = format!("http://{}:{}", server::discover_lan_host(), addr.port());

    logger::log_server_start(&local_url, &lan_url);

    // Best-effort, detached; the serving loop never waits on it
    launcher::open_browser(&local_url);

    let store: Arc<dyn AssetStore> = Arc::new(BundledAssets);
    server::start_server_loop(listener, store).await
}
