use gym_log::config::secret_key_is_set;
use gym_log::{router, AppState, Config, WorkoutStore};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if !secret_key_is_set() {
        warn!("SECRET_KEY not set");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(version = %config.app_version, "starting gym log");

    let app = router(AppState::new(config, WorkoutStore::default()));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
