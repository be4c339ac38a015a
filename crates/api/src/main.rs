use std::net::SocketAddr;
use std::sync::Arc;

use healthmon_core::thresholds::SharedThresholds;
use healthmon_db::{MySqlReadingStore, ReadingStore, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthmon_api::config::ServerConfig;
use healthmon_api::router::build_app_router;
use healthmon_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "healthmon_api=debug,healthmon_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let store_config = StoreConfig::from_env();
    tracing::info!(?store_config, "Loaded store configuration");

    // --- Store ---
    let store = MySqlReadingStore::from_config(&store_config).expect("Invalid DATABASE_URL");

    // Unreachable stores are not fatal: every request connects on its own.
    match store.ping().await {
        Ok(()) => tracing::info!("Database connection successful"),
        Err(e) => tracing::warn!(error = %e, "Database not reachable at startup"),
    }

    // --- App state ---
    let thresholds = Arc::new(SharedThresholds::default());
    tracing::info!(thresholds = ?thresholds.snapshot(), "Thresholds initialised to defaults");

    let state = AppState {
        store: Arc::new(store),
        thresholds,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
