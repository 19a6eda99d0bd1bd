//! Dashboard (KPI) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Trend calculation, metric vocabulary, entities, source trait
//! - `application/` - Use cases
//! - `infra/` - KPI source implementations (mock only for now)
//! - `presentation/` - HTTP handlers
//!
//! Every tile compares the current period against the previous one.
//! Whether a rise is good or bad is decided per metric, never inferred.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::KpiSource;
pub use domain::trend::{Direction, Polarity, Tone, Trend, percent_change};
pub use error::{DashboardError, DashboardResult};
pub use infra::mock::MockKpiSource;
pub use presentation::router::dashboard_router;

#[cfg(test)]
mod tests;
