//! Sign In Use Case
//!
//! Checks the shared viewer password and issues the session cookie value.

use std::net::IpAddr;
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::error::{AuthError, AuthResult};

/// Sign in input
#[derive(Debug, Clone)]
pub struct SignInInput {
    pub password: String,
    /// Used for logging only
    pub client_ip: Option<IpAddr>,
}

/// Sign in output
#[derive(Debug, Clone)]
pub struct SignInOutput {
    /// Set-Cookie value carrying the session and its Max-Age
    pub set_cookie: String,
}

/// Sign in use case
pub struct SignInUseCase {
    config: Arc<GateConfig>,
}

impl SignInUseCase {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let expected = self
            .config
            .viewer_password
            .as_ref()
            .ok_or(AuthError::PasswordNotConfigured)?;

        if !expected.verify(&input.password) {
            tracing::warn!(
                client_ip = ?input.client_ip,
                "Invalid login attempt"
            );
            return Err(AuthError::InvalidPassword);
        }

        tracing::info!(client_ip = ?input.client_ip, "Viewer signed in");

        Ok(SignInOutput {
            set_cookie: self
                .config
                .session_cookie()
                .build_set_cookie(&self.config.session_value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(password: &str) -> SignInInput {
        SignInInput {
            password: password.to_string(),
            client_ip: None,
        }
    }

    #[test]
    fn test_correct_password_issues_session() {
        let config = Arc::new(GateConfig::development().with_viewer_password("letmein"));
        let output = SignInUseCase::new(config).execute(input("letmein")).unwrap();

        assert!(output.set_cookie.starts_with("mktdash_session=ok;"));
        assert!(output.set_cookie.contains("Max-Age=43200"));
        assert!(output.set_cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_cookie_max_age_follows_session_ttl() {
        let config = GateConfig {
            session_ttl: std::time::Duration::from_secs(600),
            ..GateConfig::development().with_viewer_password("letmein")
        };
        let output = SignInUseCase::new(Arc::new(config))
            .execute(input("letmein"))
            .unwrap();

        assert!(output.set_cookie.contains("Max-Age=600"));
    }

    #[test]
    fn test_wrong_password() {
        let config = Arc::new(GateConfig::development().with_viewer_password("letmein"));
        let result = SignInUseCase::new(config).execute(input("nope"));

        assert!(matches!(result, Err(AuthError::InvalidPassword)));
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let config = Arc::new(GateConfig::development().with_viewer_password("letmein"));
        let result = SignInUseCase::new(config).execute(input(""));

        assert!(matches!(result, Err(AuthError::InvalidPassword)));
    }

    #[test]
    fn test_missing_viewer_password() {
        let config = Arc::new(GateConfig::development());
        let result = SignInUseCase::new(config).execute(input("anything"));

        assert!(matches!(result, Err(AuthError::PasswordNotConfigured)));
    }
}
