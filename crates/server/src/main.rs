//! Binary entry point for the cabinet item store

use std::sync::Arc;

use tracing::info;

use cabinet_primitives::ItemStore;
use cabinet_server::{init_tracing, router, ServerConfig};
use cabinet_store::MemoryStore;

#[tokio::main]
async fn main() -> cabinet_core::Result<()> {
    init_tracing();

    let config = ServerConfig::load()?;

    // One shared backend handle for the process lifetime.
    let backend = Arc::new(MemoryStore::new());
    let store = Arc::new(ItemStore::new(backend));

    let app = router(store);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "cabinet listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("cabinet shut down");
    Ok(())
}

/// Resolve on ctrl-c or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
