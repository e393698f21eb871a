//! Finboard is a web app for tracking personal income and expenses.
//!
//! This library provides an HTTP server that directly serves HTML pages for
//! the dashboard, help center, notifications and about pages, alongside a JSON
//! API over the same in-memory data.

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod about;
mod alert;
mod api_error;
mod app_state;
mod config;
mod dashboard;
mod endpoints;
mod error;
mod error_page;
mod faq;
mod html;
mod logging;
mod navigation;
mod notification;
mod routing;
mod seed;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api_error::{ErrorCode, StructuredError};
pub use app_state::AppState;
pub use config::{SeedSource, ServerConfig};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware, setup_logging};
pub use routing::build_router;
pub use transaction::{
    Category, Transaction, TransactionInput, TransactionStore, TransactionType,
    validation::{RawInput, RawValue, ValidationFailure, validate_transaction},
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install the terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
