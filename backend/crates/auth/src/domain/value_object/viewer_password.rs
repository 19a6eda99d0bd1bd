//! Viewer Password Value Object
//!
//! The single shared password that unlocks the dashboard.
//! Memory is zeroized on drop and the value never appears in `Debug` output.

use platform::crypto::secret_eq;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ViewerPassword(String);

impl ViewerPassword {
    /// Wrap a configured password. Empty strings count as "not configured".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Constant-time check of a submitted password
    pub fn verify(&self, candidate: &str) -> bool {
        secret_eq(candidate, &self.0)
    }
}

impl fmt::Debug for ViewerPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewerPassword(<redacted>)")
    }
}
