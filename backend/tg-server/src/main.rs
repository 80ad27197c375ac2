use tg_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = tg_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = logger::prepare_log_file(&config)?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = AppState::from_config(&config);
    info!(
        "Tenant gate initialized with {} allowed tenant(s)",
        state.gate.allowed_tenants().len()
    );

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address (port may be auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
