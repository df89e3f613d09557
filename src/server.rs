//! Dashboard Static Host
//!
//! Serves the built dashboard with Axum.
//!
//! # Routes
//!
//! - `GET /` - `307` redirect to `/dashboard`, no body
//! - `GET /health/live` - Liveness probe
//! - anything else - files from the dist directory, falling back to
//!   `index.html` so client-side routes such as `/dashboard` load the app

use axum::{http::StatusCode, response::Redirect, routing::get, Router};
use std::path::Path;
use thiserror::Error;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Route the root path forwards to
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Static host errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the router serving `dist_dir`
pub fn build_router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let assets = ServeDir::new(dist_dir).fallback(index);

    Router::new()
        .route("/", get(redirect_to_dashboard))
        .route("/health/live", get(liveness))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

/// GET /
async fn redirect_to_dashboard() -> Redirect {
    Redirect::temporary(DASHBOARD_PATH)
}

/// GET /health/live
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Start the static host
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    if !config.dist_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {:?}; build the UI with `trunk build` in chartboard-ui",
            config.dist_dir
        );
    }

    let router = build_router(&config.dist_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Chartboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Chartboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
