//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Login request
///
/// Missing or mistyped fields fall back to an empty password.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Lenient parse: any malformed body becomes an empty password
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// `{"ok": true}` returned by login and logout
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}
