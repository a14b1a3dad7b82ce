//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! This binary is useful for development and debugging when you only want the
//! REST server (with OpenAPI/Swagger UI). The workspace's main `tcr-run`
//! binary is the deployment entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the TCR REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000) after verifying the static content data.
///
/// # Environment Variables
/// - `TCR_REST_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the static content data fails its integrity check,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tcr_core::verify()?;

    let addr = std::env::var("TCR_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting TCR REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, api_rest::app()).await?;

    Ok(())
}
