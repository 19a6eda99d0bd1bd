//! Application Layer
//!
//! Use cases.

pub mod build_dashboard;

// Re-exports
pub use build_dashboard::BuildDashboardUseCase;
