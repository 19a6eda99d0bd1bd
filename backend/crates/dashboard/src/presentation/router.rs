//! Dashboard Router

use crate::domain::repository::KpiSource;
use crate::presentation::handlers::{self, DashboardAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the dashboard API router for any KPI source, meant to be nested
/// under `/api`
pub fn dashboard_router<S>(source: S) -> Router
where
    S: KpiSource + Clone + Send + Sync + 'static,
{
    let state = DashboardAppState {
        source: Arc::new(source),
    };

    Router::new()
        .route("/dashboard", get(handlers::get_dashboard::<S>))
        .with_state(state)
}
