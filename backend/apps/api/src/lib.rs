//! Marketing dashboard server
//!
//! Assembles the gate, the login/logout API, the KPI API, and the two HTML
//! shells into one router.

pub mod app;
pub mod config;
pub mod pages;

pub use app::build_app;
pub use config::ServerConfig;
