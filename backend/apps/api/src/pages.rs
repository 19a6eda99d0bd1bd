//! HTML shells and page scripts
//!
//! Rendering happens in the browser; the server only ships static markup.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use kernel::error::app_error::AppError;

const DASHBOARD_HTML: &str = include_str!("../assets/index.html");
const LOGIN_HTML: &str = include_str!("../assets/login.html");
const DASHBOARD_JS: &str = include_str!("../assets/dashboard.js");
const LOGIN_JS: &str = include_str!("../assets/login.js");

/// GET /
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// GET /login
pub async fn login() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

/// GET /favicon.ico
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /assets/{file}
pub async fn asset(Path(file): Path<String>) -> Response {
    let script = match file.as_str() {
        "dashboard.js" => DASHBOARD_JS,
        "login.js" => LOGIN_JS,
        _ => return AppError::not_found("Not found").into_response(),
    };

    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        script,
    )
        .into_response()
}
