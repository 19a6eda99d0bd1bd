//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use platform::client::extract_client_ip;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, OkResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState {
    pub config: Arc<GateConfig>,
}

/// Best-effort client IP (X-Forwarded-For, then the peer address)
///
/// Never rejects; the peer address is only known when the server was started
/// with `into_make_service_with_connect_info`.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let direct_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip());

        Ok(ClientIp(extract_client_ip(&parts.headers, direct_ip)))
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login(
    State(state): State<AuthAppState>,
    ClientIp(client_ip): ClientIp,
    body: Bytes,
) -> AuthResult<impl IntoResponse> {
    let req = LoginRequest::from_body(&body);

    let use_case = SignInUseCase::new(state.config.clone());
    let output = use_case.execute(SignInInput {
        password: req.password,
        client_ip,
    })?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, output.set_cookie)],
        Json(OkResponse::new()),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
pub async fn logout(State(state): State<AuthAppState>, headers: HeaderMap) -> impl IntoResponse {
    let session = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let output = SignOutUseCase::new(state.config.clone()).execute(session.as_deref());

    (
        StatusCode::OK,
        [(header::SET_COOKIE, output.clear_cookie)],
        Json(OkResponse::new()),
    )
}
