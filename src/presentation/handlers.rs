// HTTP request handlers
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct StatsQuery {
    /// Report instant; defaults to the time of the call.
    pub as_of: Option<DateTime<Utc>>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Admin dashboard statistics as one JSON document
pub async fn dashboard_stats(
    Query(query): Query<StatsQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let as_of = query.as_of.unwrap_or_else(Utc::now);

    match state.dashboard_service.dashboard_stats(as_of).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            tracing::error!("Error assembling dashboard stats: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
