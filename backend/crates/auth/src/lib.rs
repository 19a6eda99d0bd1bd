//! Auth (Viewer Gate) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Gate policy and value objects
//! - `application/` - Use cases and configuration
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Shared-password login (`POST /api/login`)
//! - Cookie-clearing logout (`POST /api/logout`)
//! - Request gate redirecting sessionless requests to `/login`
//!
//! ## Security Model
//! - The session cookie is a fixed, unsigned value; holding it is the whole
//!   authorization. Expiry is left to the browser (`Max-Age`).
//! - Password comparison is constant-time
//! - Cookies are HttpOnly, SameSite=Lax, and Secure in release builds

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use domain::gate::{GateDecision, GatePolicy};
pub use error::{AuthError, AuthResult};
pub use presentation::middleware::{GateMiddlewareState, require_viewer_session};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
