use axum::Router;
use dioxus_logger::tracing::{self, Level};
use tokio::net::TcpListener;

use crate::error::AppError;

/// Initializes the global tracing subscriber at `level`.
///
/// Failure only happens if another subscriber was installed first, in which case
/// that one keeps receiving events.
pub fn init_logger(level: Level) {
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Binds the liveness listener on all interfaces.
///
/// # Arguments
/// - `port` - TCP port from configuration
///
/// # Returns
/// - `Ok(TcpListener)` - Bound listener
/// - `Err(AppError)` - Port is unavailable
pub async fn bind_liveness(port: u16) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Web server running on port {}", port);

    Ok(listener)
}

/// Serves the liveness endpoint until the process exits.
///
/// The router has no routes; every request is answered with 404. Hosting platforms
/// that health-check by port only need the connection to be accepted.
pub async fn serve_liveness(listener: TcpListener) -> Result<(), AppError> {
    axum::serve(listener, Router::new()).await?;

    Ok(())
}
