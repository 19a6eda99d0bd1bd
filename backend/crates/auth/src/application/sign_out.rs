//! Sign Out Use Case
//!
//! Sessions live only in the browser, so signing out means telling the
//! browser to drop the cookie.

use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::gate::has_session;

/// Sign out output
#[derive(Debug, Clone)]
pub struct SignOutOutput {
    /// Set-Cookie value that expires the session cookie
    pub clear_cookie: String,
}

/// Sign out use case
pub struct SignOutUseCase {
    config: Arc<GateConfig>,
}

impl SignOutUseCase {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, session_cookie: Option<&str>) -> SignOutOutput {
        tracing::info!(had_session = has_session(session_cookie), "Viewer signed out");

        SignOutOutput {
            clear_cookie: self.config.session_cookie().build_delete_cookie(),
        }
    }
}
