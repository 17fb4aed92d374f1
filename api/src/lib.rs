//! Server functions shared by every CeylonMine platform shell.
//!
//! The only call the front-end makes is the profile lookup used by the
//! navigation bar to confirm a persisted session. On the client the
//! `#[server]` macro turns `lookup_profile` into an HTTP request against
//! `/api/auth/me`; with the `server` feature the body below runs instead.

use dioxus::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

// Plain data code, so the unit tests run without the server feature.
#[cfg(any(feature = "server", test))]
mod directory;

#[cfg(any(feature = "server", test))]
pub use directory::{DirectoryError, ProfileDirectory};

/// A signed-in user as returned by the profile endpoint and as persisted
/// under the `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Role that unlocks the constructor dashboard.
pub const DASHBOARD_ROLE: &str = "miner";

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
            last_name: None,
            email: None,
            username: None,
            role: None,
        }
    }

    /// First name if one is set and non-blank.
    pub fn display_name(&self) -> Option<&str> {
        self.first_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn can_access_dashboard(&self) -> bool {
        self.role.as_deref() == Some(DASHBOARD_ROLE)
    }
}

// Older sign-in flows stored numeric identifiers.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Resolve a user identifier to its profile, or `None` when unknown.
#[server(LookupProfile, prefix = "/api", endpoint = "auth/me")]
pub async fn lookup_profile(user_id: String) -> Result<Option<UserProfile>, ServerFnError> {
    let directory = ProfileDirectory::shared();
    let profile = directory.find(&user_id);
    tracing::debug!(user_id = %user_id, found = profile.is_some(), "profile lookup");
    Ok(profile)
}
