//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (TeamSample, KpiRow, DashboardReport)
//! - The report date (`AsOf`)
//! - Metric vocabulary and the per-metric polarity table
//! - Trend calculation
//! - Repository traits (KPI source interface)

pub mod as_of;
pub mod entities;
pub mod metric;
pub mod repository;
pub mod trend;
