//! Admin session record and login payloads

use super::normalize::text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed-in administrator, as persisted in the session slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl Admin {
    /// Build from a login response payload.
    ///
    /// Accepts the user record directly or wrapped as `{admin: {...}}`.
    /// An empty name falls back to the local part of the e-mail address.
    /// Returns `None` when the payload carries no e-mail.
    pub fn from_login_payload(raw: &Value) -> Option<Self> {
        let record = raw.get("admin").filter(|a| a.is_object()).unwrap_or(raw);

        let email = text(record, &["email"]);
        if email.is_empty() {
            return None;
        }

        let name = text(record, &["name"]);
        let name = if name.trim().is_empty() {
            email.split('@').next().unwrap_or_default().to_string()
        } else {
            name
        };

        Some(Self {
            id: text(record, &["id"]),
            email,
            name,
        })
    }
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
