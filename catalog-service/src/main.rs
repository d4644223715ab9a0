use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod models;
mod routes;
mod services;
mod utils;

use models::storage::{BookStore, MySqlBackend};
use routes::{AppState, Backend};
use services::review::ReviewClient;
use utils::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_service=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mysql_backend = MySqlBackend::new(&config.store);
    info!(
        "Ping-ing DB at {}:{}/{}",
        config.store.host, config.store.port, config.store.database
    );
    if let Err(e) = mysql_backend.test_connection().await {
        error!("Could not start, {}", e);
        std::process::exit(1);
    }
    info!("Storage backend connection successful");
    let store: Backend = Arc::new(mysql_backend);

    let reviews = match ReviewClient::new(&config.review) {
        Ok(client) => client,
        Err(e) => {
            error!("Could not build review client: {}", e);
            std::process::exit(1);
        }
    };

    let app = routes::router(AppState { store, reviews }, &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Could not bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Running on http://localhost:{}", config.port);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
