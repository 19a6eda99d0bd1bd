//! Mock KPI source
//!
//! Fixed placeholder numbers until a real data source is wired in.
//! The same values are returned for every date.

use chrono::NaiveDate;

use crate::domain::entities::{MetricSample, TeamSample};
use crate::domain::metric::Team;
use crate::domain::repository::KpiSource;
use crate::error::DashboardResult;

/// Minutes in a working day (cycle time is shown in 8-hour days)
const WORKDAY_MINUTES: u32 = 8 * 60;

const fn workdays(days: u32, hours: u32) -> u32 {
    days * WORKDAY_MINUTES + hours * 60
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockKpiSource;

impl MockKpiSource {
    pub fn new() -> Self {
        Self
    }

    fn sample(team: Team) -> TeamSample {
        match team {
            Team::Pursuits => TeamSample {
                open: MetricSample::new(28, 18),
                cycle_minutes: MetricSample::new(workdays(8, 7), workdays(9, 0)),
                completions: MetricSample::new(41, 36),
                top3: Default::default(),
            },
            Team::Creative => TeamSample {
                open: MetricSample::new(12, 14),
                cycle_minutes: MetricSample::new(workdays(3, 2), workdays(3, 6)),
                completions: MetricSample::new(22, 19),
                top3: Default::default(),
            },
        }
    }
}

impl KpiSource for MockKpiSource {
    async fn team_sample(&self, team: Team, as_of: NaiveDate) -> DashboardResult<TeamSample> {
        tracing::trace!(%team, %as_of, "Serving mock KPI sample");
        Ok(Self::sample(team))
    }
}
