//! REST API server for card number checking.
//!
//! # Usage
//!
//! ```bash
//! # Start server on the default port (8080, or $PORT)
//! cardchecker-server
//!
//! # With custom port and standard Luhn comparison
//! cardchecker-server --port 3000 --luhn standard
//!
//! # Check a number
//! curl -X POST localhost:8080/check -d '{"card_number": "4532 0151 1283 0366"}' \
//!     -H 'Content-Type: application/json'
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:8080/swagger-ui/ for interactive API documentation.

use cardchecker::api;
use cardchecker::config::ServerConfig;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();

    let classifier = config.classifier.build().map_err(|e| {
        tracing::error!("Failed to load network rules: {}", e);
        e
    })?;
    tracing::info!(
        rules = classifier.table().len(),
        match_order = classifier.table().order().name(),
        luhn = classifier.luhn_mode().name(),
        "Loaded network rule table"
    );

    let app = api::router(classifier);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
