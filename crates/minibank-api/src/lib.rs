//! # minibank-api
//!
//! HTTP surface for **MiniBank**.
//!
//! | Method | Path | Query | Success |
//! |---|---|---|---|
//! | POST | `/register` | `id`, `password`, `confirmpass` | 201 |
//! | POST | `/login` | `id`, `password` | 200 |
//! | GET | `/account` | | 200 |
//! | GET | `/account/{user}` | | 200 |
//! | POST | `/deposit` | `amount` | 200 |
//! | POST | `/withdraw` | `amount` | 200 |
//! | GET | `/balance` | | 200 |
//!
//! # Environment Variables
//!
//! - `HOST`: listen address (default `0.0.0.0`)
//! - `PORT`: listen port (default `3000`)
//! - `LOG_FORMAT`: `pretty` (default) | `json`
//! - `SEED_ACCOUNTS`: load the five fixture accounts (default `true`)
//! - `RUST_LOG`: tracing filter

pub mod dto;
pub mod error;
pub mod handlers;
pub mod telemetry;

use axum::{
    Router,
    routing::{get, post},
};
use minibank_core::Bank;
use minibank_types::{Result, ServiceConfig, constants};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Build the router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/account", get(handlers::list_accounts))
        .route("/account/{user}", get(handlers::get_account))
        .route("/deposit", post(handlers::deposit))
        .route("/withdraw", post(handlers::withdraw))
        .route("/balance", get(handlers::balance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the bank described by `config`.
#[must_use]
pub fn build_bank(config: &ServiceConfig) -> Bank {
    if config.seed_accounts {
        Bank::seeded()
    } else {
        Bank::new()
    }
}

/// Bind and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let state = AppState::new(build_bank(&config));
    let app = router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        service = constants::SERVICE_NAME,
        version = constants::VERSION,
        addr = %config.listen_addr,
        seeded = config.seed_accounts,
        "Server is listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Completes on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
