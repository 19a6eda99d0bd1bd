//! Build Dashboard Use Case
//!
//! Turns per-team KPI samples into the report served by `/api/dashboard`.

use std::sync::Arc;

use crate::domain::as_of::AsOf;
use crate::domain::entities::{DashboardReport, KpiRow};
use crate::domain::metric::Team;
use crate::domain::repository::KpiSource;
use crate::error::DashboardResult;

/// Build dashboard use case
pub struct BuildDashboardUseCase<S>
where
    S: KpiSource,
{
    source: Arc<S>,
}

impl<S> BuildDashboardUseCase<S>
where
    S: KpiSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, as_of: AsOf) -> DashboardResult<DashboardReport> {
        let pursuits = self.source.team_sample(Team::Pursuits, as_of.date()).await?;
        let creative = self.source.team_sample(Team::Creative, as_of.date()).await?;

        Ok(DashboardReport {
            as_of,
            pursuits: KpiRow::from(pursuits),
            creative: KpiRow::from(creative),
        })
    }
}
