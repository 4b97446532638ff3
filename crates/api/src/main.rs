use std::net::SocketAddr;
use std::sync::Arc;

use padaria_core::store::{InMemoryProductStore, ProductStore};
use padaria_db::repositories::PgProductStore;
use padaria_db::rest::RestProductStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use padaria_api::config::{ServerConfig, StoreConfig};
use padaria_api::router::build_app_router;
use padaria_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "padaria_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = config.store.backend_name(),
        "Loaded server configuration"
    );

    // --- Record store ---
    let store = connect_store(&config.store).await;

    // --- App state ---
    let state = AppState { store };

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

/// Build the configured record store backend.
///
/// The PostgreSQL backend is health-checked and migrated before the server
/// starts accepting requests.
async fn connect_store(config: &StoreConfig) -> Arc<dyn ProductStore> {
    match config {
        StoreConfig::Postgres { database_url } => {
            let pool = padaria_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            padaria_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            padaria_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgProductStore::new(pool))
        }
        StoreConfig::Rest { url, api_key } => {
            let store = RestProductStore::new(url, api_key.clone())
                .expect("Failed to build record store HTTP client");
            tracing::info!(%url, "Using hosted record store");
            Arc::new(store)
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory record store; data will not survive a restart");
            Arc::new(InMemoryProductStore::new())
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
