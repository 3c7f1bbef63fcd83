use std::sync::Arc;

use anyhow::Result;
use box_tracker_http::{AppState, create_router};
use box_tracker_service::BoxService;

use crate::open_backend;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let (storage, _) = open_backend().await?;
    let box_service = Arc::new(BoxService::new(Arc::new(storage)));
    let state = Arc::new(AppState { box_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down HTTP server");
}
