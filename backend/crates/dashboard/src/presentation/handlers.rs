//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use chrono::Utc;
use std::sync::Arc;

use crate::application::BuildDashboardUseCase;
use crate::domain::as_of::AsOf;
use crate::domain::repository::KpiSource;
use crate::error::DashboardResult;
use crate::presentation::dto::{DashboardQuery, DashboardResponse};

/// Shared state for dashboard handlers
#[derive(Clone)]
pub struct DashboardAppState<S>
where
    S: KpiSource + Clone + Send + Sync + 'static,
{
    pub source: Arc<S>,
}

/// GET /api/dashboard?asOf=YYYY-MM-DD
pub async fn get_dashboard<S>(
    State(state): State<DashboardAppState<S>>,
    Query(query): Query<DashboardQuery>,
) -> DashboardResult<Json<DashboardResponse>>
where
    S: KpiSource + Clone + Send + Sync + 'static,
{
    let today = Utc::now().date_naive();
    let as_of = AsOf::resolve(query.as_of.as_deref(), today);

    tracing::debug!(as_of = as_of.label(), date = %as_of.date(), "Building dashboard report");

    let use_case = BuildDashboardUseCase::new(state.source.clone());
    let report = use_case.execute(as_of).await?;

    Ok(Json(report.into()))
}
