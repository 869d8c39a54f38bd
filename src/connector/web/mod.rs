//! # Web Surface
//!
//! Server-rendered form, download endpoint and a small JSON API, all backed
//! by the same [`crate::GeneratePipelineUseCase`].

pub mod error;
pub mod form;
pub mod handlers;
pub mod routes;
pub mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::connector::api::Container;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::build_router;

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    info!(
        "Using model {} at {}",
        container.model(),
        container.base_url()
    );
    let app = build_router(AppState::new(container)?);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C, shutting down");
            }
        })
        .await?;

    Ok(())
}
