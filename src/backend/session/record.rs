//! Session record and the profile derived from it.

use super::SessionError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FALLBACK_NAME: &str = "User";
pub const FALLBACK_EMAIL: &str = "user@example.com";
pub const FALLBACK_INITIAL: char = 'U';

/// What the login flow persists. Fields other than `name` and `email` are
/// kept as-is so a save after a read does not drop them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            extra: Map::new(),
        }
    }

    /// Parses a stored blob. Blank input counts as nothing stored.
    pub fn parse(raw: &str) -> Result<Option<Self>, SessionError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| SessionError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|e| SessionError::Malformed(e.to_string()))
    }
}

/// Display projection of a [`SessionRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: Option<String>,
    email: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
    }

    pub fn display_email(&self) -> &str {
        self.email
            .as_deref()
            .filter(|email| !email.is_empty())
            .unwrap_or(FALLBACK_EMAIL)
    }

    /// Avatar letter: first character of the stored name.
    pub fn initial(&self) -> char {
        self.name
            .as_deref()
            .and_then(|name| name.chars().next())
            .unwrap_or(FALLBACK_INITIAL)
    }
}

impl From<SessionRecord> for UserProfile {
    fn from(record: SessionRecord) -> Self {
        Self {
            name: record.name,
            email: record.email,
        }
    }
}
