//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by the gate and the
//! dashboard:
//! - Common error types and result aliases
//! - The JSON error body returned by every API route
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod kind;
    #[cfg(feature = "axum")]
    pub mod response;
}
