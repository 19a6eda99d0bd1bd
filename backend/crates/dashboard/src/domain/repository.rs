//! Repository Traits
//!
//! Interfaces for KPI data. Implementation is in infrastructure layer.

use chrono::NaiveDate;

use crate::domain::entities::TeamSample;
use crate::domain::metric::Team;
use crate::error::DashboardResult;

/// KPI source trait
#[trait_variant::make(KpiSource: Send)]
pub trait LocalKpiSource {
    /// Current and prior-period numbers for one team as of a date
    async fn team_sample(&self, team: Team, as_of: NaiveDate) -> DashboardResult<TeamSample>;
}
