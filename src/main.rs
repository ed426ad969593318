use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webhook_monitor::config::AppConfig;
use webhook_monitor::database::Database;
use webhook_monitor::webhooks;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webhook_monitor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting webhook monitor");

    // Load configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded");

    // Initialize the event store
    let database = Database::new(&config.database_url).await?;
    database.ensure_schema().await?;
    info!("Event store ready at {}", config.database_url);

    // Build application. The browser dashboard polls /events from another
    // origin, hence the permissive CORS layer.
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/webhook", post(webhooks::github::handle_webhook))
        .route("/events", get(webhooks::github::list_events))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state((config.clone(), database));

    // Start server
    let addr = SocketAddr::new(config.server_host.parse()?, config.server_port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "webhook-monitor",
        "timestamp": chrono::Utc::now()
    }))
}
