// src/main.rs

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use reelbox_backend::api::create_router;
use reelbox_backend::config::AppConfig;
use reelbox_backend::db;
use reelbox_backend::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "reelbox-backend", about = "Reelbox video sharing backend")]
struct Args {
    /// Bind host (overrides REELBOX_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides REELBOX_PORT)
    #[arg(long)]
    port: Option<u16>,
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Missing SESSION_SECRET stops the process here
    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.logging.max_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Reelbox Backend");
    info!(
        "Session lifetime: {} days, cookie: {}",
        config.session.max_age_days, config.session.cookie_name
    );

    let pool = db::connect(&config.database).await?;
    db::migrate(&pool).await?;
    info!("Database schema up to date");

    let bind_address = config.bind_address();
    let app_state = Arc::new(AppState::new(pool, config));
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("HTTP server listening on http://{}", bind_address);
    info!("Health endpoints: /health, /ready, /live");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Shutdown complete");

    Ok(())
}
