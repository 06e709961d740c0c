//! Authorization header contributors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contributes headers to every outgoing request.
pub trait AuthProvider: Send + Sync {
    /// Headers to attach to the next request.
    fn auth_headers(&self) -> BTreeMap<String, String>;
}

/// An explicitly passed login session.
///
/// Produces `Accept: application/json` always, and a bearer `Authorization`
/// header when a token is present.
///
/// # Examples
///
/// ```
/// use satudata_interface::{AuthProvider, Session};
///
/// let anonymous = Session::anonymous();
/// assert_eq!(anonymous.auth_headers().len(), 1);
///
/// let session = Session::with_token("abc123");
/// let headers = session.auth_headers();
/// assert_eq!(headers["Authorization"], "Bearer abc123");
/// assert_eq!(headers["Accept"], "application/json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A session without credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session carrying a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    /// The bearer token, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl AuthProvider for Session {
    fn auth_headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }
}
