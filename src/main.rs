use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use process_cost_api::config::Config;
use process_cost_api::ghl_client::GhlClient;
use process_cost_api::relay::{self, AppState};

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the GHL client and HTTP
/// routes (with tracing, CORS for the browser-hosted calculator, and a
/// request body size limit), then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "process_cost_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize GHL client
    let ghl_client = GhlClient::from_config(&config)?;
    tracing::info!("✓ GHL client initialized: {}", config.ghl_api_base);

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        ghl_client,
    });

    let app = relay::router(app_state)
        // Request size limit: 1MB max payload (lead records are tiny)
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
