use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::product::{repository::SeaOrmProductRepository, ProductService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the store handle into the product service. The connection is owned by the state.
pub fn build_state(db: DatabaseConnection) -> ServerState {
    let repo = SeaOrmProductRepository::new(db);
    ServerState { products: ProductService::new(Arc::new(repo)) }
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
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
    info!(event = "shutdown_signal", "shutting down, draining in-flight requests");
}

/// Public entry: connect the store, build the app and serve until a shutdown signal
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect(&cfg.database).await?;
    info!(max_connections = cfg.database.max_connections, "database connected");

    let app = build_app(build_state(db));

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "HTTP server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
