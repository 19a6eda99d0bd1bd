//! Check Session Use Case
//!
//! Applies the gate policy to a request path and its headers.

use axum::http::HeaderMap;
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::gate::{GateDecision, GatePolicy};

/// Check session use case
pub struct CheckSessionUseCase {
    policy: Arc<GatePolicy>,
    config: Arc<GateConfig>,
}

impl CheckSessionUseCase {
    pub fn new(policy: Arc<GatePolicy>, config: Arc<GateConfig>) -> Self {
        Self { policy, config }
    }

    pub fn execute(&self, path: &str, headers: &HeaderMap) -> GateDecision {
        let cookie = platform::cookie::extract_cookie(headers, &self.config.session_cookie_name);
        self.policy.decide(path, cookie.as_deref())
    }
}
