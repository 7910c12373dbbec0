use dotenvy::dotenv;
use tracing::{error, info};

use playdeck::logging::init_tracing;
use playdeck::metrics::init_metrics;
use playdeck::router::init_router;
use playdeck::state::AppState;
use playdeck_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let state = AppState::from_config(&config)?.with_metrics(init_metrics());
    let app = init_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        address = %address,
        environment = ?config.environment,
        hash_cost = config.hasher.cost,
        "🚀 Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
