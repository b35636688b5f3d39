use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::archetype::Archetype;

/// Identifier of an onboarding session and of its persisted profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Placeholder the identity layer stores when sign-in withholds the real
/// name. Treated the same as an absent name.
pub const NAME_PLACEHOLDER: &str = "Era User";

/// Inbound port supplying a previously known display name, if any.
pub trait NameSource: Send + Sync {
    fn stored_name(&self) -> Option<String>;
}

/// Normalizes a stored name to the clean form the session core expects:
/// trimmed, with the placeholder sentinel collapsed to empty.
pub fn normalize_stored_name(raw: Option<String>) -> String {
    match raw {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed == NAME_PLACEHOLDER {
                String::new()
            } else {
                trimmed.to_string()
            }
        }
        None => String::new(),
    }
}

/// Persisted classification profile written when a session finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeProfileRecord {
    pub session_id: SessionId,
    pub display_name: String,
    pub primary: Archetype,
    pub secondary: Option<Archetype>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VibeProfileRecord {
    pub fn profile_view(&self) -> ProfileView {
        ProfileView {
            session_id: self.session_id.clone(),
            display_name: self.display_name.clone(),
            primary: self.primary,
            primary_title: self.primary.title(),
            secondary: self.secondary,
            secondary_title: self.secondary.map(Archetype::title),
            description: self.description.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Sanitized representation of a stored profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub session_id: SessionId,
    pub display_name: String,
    pub primary: Archetype,
    pub primary_title: &'static str,
    pub secondary: Option<Archetype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_title: Option<&'static str>,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfileStore: Send + Sync {
    fn upsert(&self, record: VibeProfileRecord) -> Result<VibeProfileRecord, ProfileStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<VibeProfileRecord>, ProfileStoreError>;
}

/// Error enumeration for profile store failures.
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile already exists")]
    Conflict,
    #[error("profile not found")]
    NotFound,
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook notified with the classification summary on finish.
pub trait ResultPublisher: Send + Sync {
    fn publish(&self, event: VibeResultEvent) -> Result<(), PublishError>;
}

/// Event payload so routes/tests can assert the integration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeResultEvent {
    pub session_id: SessionId,
    pub primary: Archetype,
    pub secondary: Option<Archetype>,
    pub summary: String,
}

/// Result dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("result transport unavailable: {0}")]
    Transport(String),
}
