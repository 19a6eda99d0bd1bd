//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DashboardReport, Kpi, KpiRow};
use crate::domain::trend::{Direction, Tone};

/// GET /api/dashboard query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub as_of: Option<String>,
}

/// Count-style tile (open tasks, completions)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountTile {
    pub value: u32,
    pub trend_pct: f64,
    pub direction: Direction,
    pub tone: Tone,
}

/// Cycle time tile, in minutes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleTile {
    pub value_minutes: u32,
    pub trend_pct: f64,
    pub direction: Direction,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowResponse {
    pub open: CountTile,
    pub cycle: CycleTile,
    pub completions: CountTile,
    pub top3: [String; 3],
}

/// GET /api/dashboard response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub as_of: String,
    pub pursuits: RowResponse,
    pub creative: RowResponse,
}

impl From<Kpi> for CountTile {
    fn from(kpi: Kpi) -> Self {
        Self {
            value: kpi.value,
            trend_pct: kpi.trend.pct,
            direction: kpi.trend.direction,
            tone: kpi.trend.tone,
        }
    }
}

impl From<Kpi> for CycleTile {
    fn from(kpi: Kpi) -> Self {
        Self {
            value_minutes: kpi.value,
            trend_pct: kpi.trend.pct,
            direction: kpi.trend.direction,
            tone: kpi.trend.tone,
        }
    }
}

impl From<KpiRow> for RowResponse {
    fn from(row: KpiRow) -> Self {
        Self {
            open: row.open.into(),
            cycle: row.cycle.into(),
            completions: row.completions.into(),
            top3: row.top3,
        }
    }
}

impl From<DashboardReport> for DashboardResponse {
    fn from(report: DashboardReport) -> Self {
        Self {
            as_of: report.as_of.label().to_string(),
            pursuits: report.pursuits.into(),
            creative: report.creative.into(),
        }
    }
}
