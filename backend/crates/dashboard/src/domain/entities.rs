//! Domain Entities
//!
//! Raw per-team samples and the report built from them.

use crate::domain::as_of::AsOf;
use crate::domain::metric::MetricKind;
use crate::domain::trend::Trend;

/// Current and prior-period value of one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSample {
    pub current: u32,
    pub previous: u32,
}

impl MetricSample {
    pub const fn new(current: u32, previous: u32) -> Self {
        Self { current, previous }
    }
}

/// Everything a KPI source reports for one team
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSample {
    pub open: MetricSample,
    /// Minutes on an 8-hour working day
    pub cycle_minutes: MetricSample,
    pub completions: MetricSample,
    pub top3: [String; 3],
}

/// A single KPI tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpi {
    pub value: u32,
    pub trend: Trend,
}

impl Kpi {
    pub fn from_sample(kind: MetricKind, sample: MetricSample) -> Self {
        Self {
            value: sample.current,
            trend: Trend::between(
                f64::from(sample.current),
                f64::from(sample.previous),
                kind.polarity(),
            ),
        }
    }
}

/// One team's row of tiles
#[derive(Debug, Clone, PartialEq)]
pub struct KpiRow {
    pub open: Kpi,
    pub cycle: Kpi,
    pub completions: Kpi,
    pub top3: [String; 3],
}

impl From<TeamSample> for KpiRow {
    fn from(sample: TeamSample) -> Self {
        Self {
            open: Kpi::from_sample(MetricKind::OpenTasks, sample.open),
            cycle: Kpi::from_sample(MetricKind::CycleTime, sample.cycle_minutes),
            completions: Kpi::from_sample(MetricKind::Completions, sample.completions),
            top3: sample.top3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub as_of: AsOf,
    pub pursuits: KpiRow,
    pub creative: KpiRow,
}
