//! The persisted session record (`user` key).

use api::UserProfile;
use thiserror::Error;

use super::platform::Host;
use super::storage::{KeyValueStore, StorageError};
use crate::config::USER_KEY;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored session is not a valid profile: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored session has an empty user identifier")]
    MissingId,
}

/// Read the stored profile. `Ok(None)` means nobody is signed in.
pub fn read_session(store: &dyn KeyValueStore) -> Result<Option<UserProfile>, SessionError> {
    let Some(raw) = store.get(USER_KEY) else {
        return Ok(None);
    };
    let profile: UserProfile = serde_json::from_str(&raw)?;
    if profile.id.trim().is_empty() {
        return Err(SessionError::MissingId);
    }
    Ok(Some(profile))
}

pub fn persist_session(store: &dyn KeyValueStore, profile: &UserProfile) -> Result<(), StorageError> {
    let raw = serde_json::to_string(profile)?;
    store.set(USER_KEY, &raw)
}

/// Drop the session cookie and the stored profile.
pub fn clear_session(store: &dyn KeyValueStore, host: &dyn Host) {
    host.clear_session_cookie();
    if let Err(err) = store.remove(USER_KEY) {
        tracing::warn!("failed to remove stored session: {err}");
    }
}
