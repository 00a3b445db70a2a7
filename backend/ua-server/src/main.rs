use ua_server::error::{Result as ServerErrorResult, ServerError};
use ua_server::{build_app_state, build_router, logger};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Pick up UA_* overrides from a local .env, if any
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ua_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(ServerError::io("create log directory"))?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ua-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = ua_db::create_pool(&database_path, config.store.max_connections).await?;
    info!("Migrations complete");

    let app_state = build_app_state(pool.clone(), &config.auth, config.store.timeout())?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::io("bind listener"))?;
    // Actual bound address (port 0 is auto-assigned)
    let local_addr = listener
        .local_addr()
        .map_err(ServerError::io("read bound address"))?;
    info!("Server listening on {}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::io("serve requests"))?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Without a signal handler, run until the process is killed
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
