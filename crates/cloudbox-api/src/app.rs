//! Application builder and server entry point.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use cloudbox_assets::HmacUploadSigner;
use cloudbox_auth::JwtIdentityVerifier;
use cloudbox_core::config::AppConfig;
use cloudbox_core::error::{AppError, ErrorKind};
use cloudbox_core::result::AppResult;
use cloudbox_database::EntryStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Builds the production state around `store` from configuration.
pub fn build_state(config: AppConfig, store: Arc<dyn EntryStore>) -> AppResult<AppState> {
    let identity = Arc::new(JwtIdentityVerifier::new(&config.auth)?);
    let issuer = Arc::new(HmacUploadSigner::new(&config.assets));

    if config.assets.private_key.is_empty() {
        tracing::warn!("assets.private_key is empty; upload authorization will fail");
    }

    Ok(AppState::new(config, store, identity, issuer))
}

/// Runs the Cloudbox server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig, store: Arc<dyn EntryStore>) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(build_state(config, store)?);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(%addr, "Cloudbox server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Cloudbox server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
