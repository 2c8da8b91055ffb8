//! Access gate
//!
//! There is no session object. Every mutating call receives an [`Access`]
//! value; the caller obtains `Access::Admin` by presenting the configured
//! administrator credentials.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Capability passed into each service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Anonymous,
    Admin,
}

impl Access {
    pub fn is_admin(&self) -> bool {
        matches!(self, Access::Admin)
    }

    /// Reject anything but an authenticated administrator
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }
}

/// Administrator credentials, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "default".to_string(),
        }
    }
}

impl AdminCredentials {
    /// Check a login attempt. The username is checked first.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Access> {
        if username != self.username {
            return Err(Error::InvalidUsername);
        }
        if password != self.password {
            return Err(Error::InvalidPassword);
        }
        Ok(Access::Admin)
    }

    /// Resolve the caller's access from optional login fields.
    ///
    /// No username means anonymous. A failed login is an error only when
    /// the caller `writes`; read-only callers continue anonymously.
    pub fn resolve(&self, username: Option<&str>, password: Option<&str>, writes: bool) -> Result<Access> {
        let Some(username) = username else {
            return Ok(Access::Anonymous);
        };
        match self.authenticate(username, password.unwrap_or_default()) {
            Ok(access) => Ok(access),
            Err(err) if !writes => {
                tracing::warn!("Login failed ({}), continuing read-only", err);
                Ok(Access::Anonymous)
            }
            Err(err) => Err(err),
        }
    }
}
