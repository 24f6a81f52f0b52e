//! Credential comparison.
//!
//! Passwords are stored and compared as plain text. All comparisons go
//! through [`CredentialCheck`] so a hashed scheme only has to replace the
//! implementation.

use serde::{Deserialize, Serialize};

/// Compares a supplied password against the stored one.
pub trait CredentialCheck {
    /// True if `supplied` is the password recorded as `stored`.
    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Exact string comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl CredentialCheck for PlainText {
    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored == supplied
    }
}

/// The built-in administrator login. There is no stored admin record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCredentials {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl AdminCredentials {
    /// Check a login attempt using `check` for the password.
    #[must_use]
    pub fn matches(&self, check: &impl CredentialCheck, username: &str, password: &str) -> bool {
        self.username == username && check.verify(&self.password, password)
    }
}
