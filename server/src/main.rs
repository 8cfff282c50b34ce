//! fenboard server - chessboard position rendering over HTTP
//!
//! Serves `GET /render?board=<notation>`: the board parameter is FEN-style
//! piece placement, the response a PNG image of the position.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (0.0.0.0:8080)
//! fenboard-server
//!
//! # Custom bind address
//! BIND=127.0.0.1:3000 fenboard-server
//!
//! # Verbose logging
//! RUST_LOG=debug fenboard-server
//! ```
//!
//! # Signals
//!
//! `SIGTERM` / `SIGINT`: graceful shutdown.

mod assets;
mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

/// fenboard - render chessboard positions as PNG images over HTTP
#[derive(Parser, Debug)]
#[command(name = "fenboard-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address and port to listen on
    #[arg(
        short = 'b',
        long,
        env = "BIND",
        default_value = "0.0.0.0:8080",
        value_name = "ADDR"
    )]
    bind: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "FENBOARD_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Initialize logging with the specified level
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("fenboard_server={level},fenboard_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Resolve when a shutdown signal arrives
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received SIGINT, initiating shutdown");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, initiating shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging first
    init_logging(&args.log_level);

    info!("fenboard server starting");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Decode the bundled piece sprites before accepting anything; an
    // incomplete piece set is fatal.
    let pieces = assets::load().context("Failed to load piece sprites")?;
    info!(
        sprites = fenboard_core::PieceKind::PIECES.len(),
        "Piece sprites loaded"
    );

    let app = server::router(Arc::new(pieces));

    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", args.bind))?;
    info!(addr = %args.bind, "Listening for requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("fenboard server stopped cleanly");
    Ok(())
}
