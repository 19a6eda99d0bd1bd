//! Infrastructure Layer
//!
//! KPI source implementations.

pub mod mock;
