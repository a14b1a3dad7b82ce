//! Workspace entry point for the TCR content service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the TCR application
///
/// Verifies the static content data and then serves the REST API (with
/// OpenAPI/Swagger documentation) on the configured address.
///
/// # Environment Variables
/// - `TCR_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If verification, startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("tcr=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Catch stale aliases or orphaned records before taking traffic.
    tcr_core::verify()?;
    tracing::info!(
        "content data verified, {} slugs routed",
        tcr_core::all_slugs().len()
    );

    let rest_addr = std::env::var("TCR_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting TCR REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, api_rest::app()).await?;

    Ok(())
}
