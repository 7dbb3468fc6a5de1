// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_database_config;
use crate::infrastructure::postgres_metrics::PgMetricSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_stats, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let database_config = load_database_config()?;

    // Connect to the store (infrastructure layer); the connection task
    // drives the socket until the client is dropped
    let (client, connection) = tokio_postgres::connect(
        &database_config.postgres.connection_string(),
        tokio_postgres::NoTls,
    )
    .await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("Postgres connection error: {}", e);
        }
    });

    // One store implements every collection's metric trait
    let source = Arc::new(PgMetricSource::new(client));
    let dashboard_service = DashboardService::new(
        source.clone(),
        source.clone(),
        source.clone(),
        source.clone(),
        source.clone(),
        source,
    );

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/admin/dashboard/stats", get(dashboard_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    println!("Starting talentbridge-analytics service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
