mod api_docs;
mod catalog;
mod config;
mod consent;
mod errors;
mod handlers;
mod models;
mod store_client;
mod submission;
mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::store_client::ProfileStoreClient;

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - The in-flight save guard cache.
/// - The document store client.
/// - HTTP routes and middleware (CORS, Rate Limiting).
///
/// It then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_kyc_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // In-flight save guard (5 minute TTL covers any realistic upsert).
    // Entries are invalidated explicitly when a save completes; the TTL only
    // reclaims entries orphaned by a crashed request.
    let saving_customers_cache = Cache::builder()
        .time_to_live(Duration::from_secs(300))
        .max_capacity(10_000)
        .build();
    tracing::info!("In-flight save guard cache initialized");

    // Document store client, passed explicitly through AppState
    let store_client = ProfileStoreClient::new(
        config.store_base_url.clone(),
        config.store_collection.clone(),
        config.store_api_token.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize store client: {}", e))?;
    tracing::info!("✓ Document store client initialized: {}", config.store_base_url);

    // Build application state
    let app_state = Arc::new(handlers::AppState {
        store_client,
        saving_customers_cache,
    });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        // API Documentation
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_docs::ApiDoc::openapi()),
        )
        // Catalog & consent endpoints
        .route(
            "/api/v1/catalog/nationalities",
            get(handlers::get_nationalities),
        )
        .route("/api/v1/catalog/countries", get(handlers::get_countries))
        .route("/api/v1/consent/kvkk", get(handlers::get_kvkk_disclosure))
        // KYC endpoints
        .route("/api/v1/kyc/validate", post(handlers::validate_profile))
        .route("/api/v1/kyc/profiles", post(handlers::submit_profile))
        .route(
            "/api/v1/kyc/profiles/:customer_id",
            get(handlers::get_profile),
        )
        .layer(
            ServiceBuilder::new()
                // Request size limit: 1MB max payload (a KYC form is small)
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check (bypasses rate limiting)
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
