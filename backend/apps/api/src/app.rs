//! Router assembly

use auth::{GateConfig, GateMiddlewareState, auth_router, require_viewer_session};
use axum::{Json, Router, middleware, routing::get};
use dashboard::{KpiSource, dashboard_router};
use kernel::error::app_error::AppError;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::pages;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

/// Build the full application router
///
/// `/api/health` is mounted outside the gate layer; everything else,
/// including unknown paths, passes through `require_viewer_session`.
pub fn build_app<S>(gate: GateConfig, source: S) -> Router
where
    S: KpiSource + Clone + Send + Sync + 'static,
{
    let gate = Arc::new(gate);
    let gate_state = GateMiddlewareState::new(gate.clone());

    let api = auth_router(gate).merge(dashboard_router(source));

    let gated = Router::new()
        .route("/", get(pages::dashboard))
        .route("/login", get(pages::login))
        .route("/favicon.ico", get(pages::favicon))
        .route("/assets/{file}", get(pages::asset))
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            gate_state,
            require_viewer_session,
        ));

    Router::new()
        .route("/api/health", get(health))
        .merge(gated)
        .layer(TraceLayer::new_for_http())
}
