use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use kassa_bridge::adapters::http::{api_router, PaymentsAppState};
use kassa_bridge::adapters::notify::{HttpPaymentLedger, HttpStorefrontNotifier};
use kassa_bridge::adapters::yookassa::YookassaGateway;
use kassa_bridge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    // Logging; RUST_LOG overrides the configured directive
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    // Missing credentials or endpoints are deployment errors; refuse to start
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration; exiting");
        std::process::exit(1);
    }

    let gateway = Arc::new(YookassaGateway::new(config.yookassa.clone()));
    let storefront = Arc::new(HttpStorefrontNotifier::new(
        config.notify.storefront_url.clone(),
    ));
    let ledger = Arc::new(HttpPaymentLedger::new(config.notify.ledger_url.clone()));

    let state = PaymentsAppState::new(gateway, storefront, ledger, &config);

    let app = Router::new()
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config)?)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Starting kassa-bridge");

    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS from configuration: explicit origins when set, permissive otherwise.
fn cors_layer(config: &AppConfig) -> Result<CorsLayer, http::header::InvalidHeaderValue> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
