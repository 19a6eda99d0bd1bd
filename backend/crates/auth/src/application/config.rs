//! Application Configuration
//!
//! Configuration for the viewer gate and the login/logout flow.

use std::env;
use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::gate::GatePolicy;
use crate::domain::value_object::ViewerPassword;

/// Environment variable holding the shared viewer password
pub const VIEWER_PASSWORD_ENV: &str = "VIEWER_PASSWORD";

/// Gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Value written into the session cookie
    pub session_value: String,
    /// Session TTL (12 hours)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Shared viewer password; `None` means login is misconfigured
    pub viewer_password: Option<ViewerPassword>,
    /// Where unauthenticated requests are sent
    pub login_path: String,
    /// Paths that skip the gate on exact match
    pub public_paths: Vec<String>,
    /// Paths that skip the gate on prefix match
    pub public_prefixes: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "mktdash_session".to_string(),
            session_value: "ok".to_string(),
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            viewer_password: None,
            login_path: "/login".to_string(),
            public_paths: vec!["/login".to_string()],
            public_prefixes: vec![
                "/assets".to_string(),
                "/favicon.ico".to_string(),
                "/api/login".to_string(),
                "/api/logout".to_string(),
                "/api/health".to_string(),
            ],
        }
    }
}

impl GateConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default()
        }
    }

    /// Pick development or production defaults from the build profile,
    /// then read the viewer password from the environment.
    pub fn from_env() -> Self {
        let base = if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::default()
        };

        let password = env::var(VIEWER_PASSWORD_ENV).ok().and_then(ViewerPassword::new);

        Self {
            viewer_password: password,
            ..base
        }
    }

    pub fn with_viewer_password(self, password: impl Into<String>) -> Self {
        Self {
            viewer_password: ViewerPassword::new(password),
            ..self
        }
    }

    /// Cookie attributes shared by the issuing and clearing Set-Cookie headers
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }

    pub fn gate_policy(&self) -> GatePolicy {
        GatePolicy::new(self.public_paths.clone(), self.public_prefixes.clone())
    }
}
