use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::{brands::BrandsService, cars::CarsService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Create the catalogs and seed them when `seed.on_startup` is set.
pub async fn build_state(cfg: &AppConfig) -> AppState {
    let state = AppState::new(Arc::new(CarsService::new()), Arc::new(BrandsService::new()));
    if cfg.seed.on_startup {
        state.seed.populate().await;
    }
    state
}

/// Build the application router from configuration.
pub async fn build_app(cfg: &AppConfig) -> Router {
    let state = build_state(cfg).await;
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await;

    // Bind and serve
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "car dealership server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
