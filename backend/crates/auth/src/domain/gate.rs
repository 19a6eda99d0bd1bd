//! Gate Policy
//!
//! Decides whether a request may reach page and API handlers.
//! The only authorization signal is the presence of a non-empty session
//! cookie; its value and expiry are not inspected.

use derive_more::Display;

/// Outcome of the gate for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GateDecision {
    #[display("pass")]
    Pass,
    #[display("redirect_to_login")]
    RedirectToLogin,
}

/// Path allow-list plus the session-presence rule
#[derive(Debug, Clone)]
pub struct GatePolicy {
    public_paths: Vec<String>,
    public_prefixes: Vec<String>,
}

impl GatePolicy {
    pub fn new(public_paths: Vec<String>, public_prefixes: Vec<String>) -> Self {
        Self {
            public_paths,
            public_prefixes,
        }
    }

    /// Exact-match paths and prefix-matched paths skip the session check
    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
            || self.public_paths.iter().any(|p| p == path)
    }

    pub fn decide(&self, path: &str, session_cookie: Option<&str>) -> GateDecision {
        if self.is_public(path) || has_session(session_cookie) {
            GateDecision::Pass
        } else {
            GateDecision::RedirectToLogin
        }
    }
}

/// Any non-empty cookie value authorizes
pub fn has_session(session_cookie: Option<&str>) -> bool {
    session_cookie.is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> GatePolicy {
        GatePolicy::new(
            vec!["/login".to_string()],
            vec![
                "/assets".to_string(),
                "/favicon.ico".to_string(),
                "/api/login".to_string(),
                "/api/logout".to_string(),
                "/api/health".to_string(),
            ],
        )
    }

    #[test]
    fn test_public_paths_pass_without_cookie() {
        let policy = policy();
        for path in [
            "/login",
            "/assets/dashboard.js",
            "/favicon.ico",
            "/api/login",
            "/api/logout",
            "/api/health",
            "/api/healthz",
        ] {
            assert_eq!(policy.decide(path, None), GateDecision::Pass, "{path}");
        }
    }

    #[test]
    fn test_login_is_exact_match() {
        let policy = policy();
        assert_eq!(
            policy.decide("/login/extra", None),
            GateDecision::RedirectToLogin
        );
        assert_eq!(policy.decide("/loginx", None), GateDecision::RedirectToLogin);
    }

    #[test]
    fn test_protected_paths_redirect_without_cookie() {
        let policy = policy();
        for path in ["/", "/print", "/api/dashboard", "/does/not/exist"] {
            assert_eq!(
                policy.decide(path, None),
                GateDecision::RedirectToLogin,
                "{path}"
            );
        }
    }

    #[test]
    fn test_empty_cookie_does_not_authorize() {
        assert_eq!(
            policy().decide("/", Some("")),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_any_non_empty_cookie_authorizes() {
        let policy = policy();
        assert_eq!(policy.decide("/", Some("ok")), GateDecision::Pass);
        assert_eq!(
            policy.decide("/api/dashboard", Some("forged")),
            GateDecision::Pass
        );
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(GateDecision::Pass.to_string(), "pass");
        assert_eq!(
            GateDecision::RedirectToLogin.to_string(),
            "redirect_to_login"
        );
    }
}
