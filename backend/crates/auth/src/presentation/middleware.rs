//! Gate Middleware
//!
//! Redirects every request without a viewer session to the login page,
//! except for the allow-listed paths.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::GateConfig;
use crate::domain::gate::{GateDecision, GatePolicy};

/// Middleware state
#[derive(Clone)]
pub struct GateMiddlewareState {
    pub policy: Arc<GatePolicy>,
    pub config: Arc<GateConfig>,
}

impl GateMiddlewareState {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self {
            policy: Arc::new(config.gate_policy()),
            config,
        }
    }
}

/// Middleware that requires a viewer session cookie
///
/// Install with `axum::middleware::from_fn_with_state`.
pub async fn require_viewer_session(
    State(state): State<GateMiddlewareState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let use_case = CheckSessionUseCase::new(state.policy.clone(), state.config.clone());

    let decision = use_case.execute(req.uri().path(), req.headers());

    match decision {
        GateDecision::Pass => next.run(req).await,
        GateDecision::RedirectToLogin => {
            tracing::debug!(path = %req.uri().path(), %decision, "No viewer session");
            Redirect::temporary(&state.config.login_path).into_response()
        }
    }
}
