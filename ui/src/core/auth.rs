//! Authentication state and the profile-lookup seam.

use std::cell::Cell;

use api::UserProfile;
use thiserror::Error;

use super::session::{self, SessionError};
use super::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(UserProfile),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            AuthState::Authenticated(profile) => Some(profile),
            AuthState::Unauthenticated => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("profile lookup failed: {0}")]
    Remote(String),
}

/// Every way a session check can fail. All of them end in a forced logout.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("profile lookup returned no profile for user {0}")]
    EmptyProfile(String),
}

/// Resolves a user identifier to a fresh profile.
#[allow(async_fn_in_trait)]
pub trait ProfileLookup {
    async fn lookup(&self, user_id: &str) -> Result<Option<UserProfile>, LookupError>;
}

/// Lookup through the `api` server function.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServerLookup;

impl ProfileLookup for ServerLookup {
    async fn lookup(&self, user_id: &str) -> Result<Option<UserProfile>, LookupError> {
        api::lookup_profile(user_id.to_string())
            .await
            .map_err(|err| LookupError::Remote(err.to_string()))
    }
}

/// Read the stored session and confirm it remotely.
///
/// `Ok(None)`: no stored session. `Ok(Some(_))`: the refreshed profile.
pub async fn resolve_session<L: ProfileLookup>(
    store: &dyn KeyValueStore,
    lookup: &L,
) -> Result<Option<UserProfile>, AuthError> {
    let Some(stored) = session::read_session(store)? else {
        return Ok(None);
    };
    match lookup.lookup(&stored.id).await? {
        Some(profile) => Ok(Some(profile)),
        None => Err(AuthError::EmptyProfile(stored.id)),
    }
}

/// Ticket identifying one auth check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket(u64);

/// Monotonic generation counter: only the most recently started check may
/// apply its result.
#[derive(Debug, Default)]
pub struct AuthSequencer {
    latest: Cell<u64>,
}

impl AuthSequencer {
    pub fn begin(&self) -> CheckTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        CheckTicket(next)
    }

    pub fn is_current(&self, ticket: CheckTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Invalidate every in-flight check (used by logout).
    pub fn invalidate(&self) {
        self.begin();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// Lookup double answering from a fixed table, or failing outright.
    #[derive(Debug, Default)]
    pub struct FixedLookup {
        pub profiles: HashMap<String, UserProfile>,
        pub fail: bool,
        pub calls: RefCell<Vec<String>>,
    }

    impl FixedLookup {
        pub fn with(profile: UserProfile) -> Self {
            let mut profiles = HashMap::new();
            profiles.insert(profile.id.clone(), profile);
            Self {
                profiles,
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl ProfileLookup for FixedLookup {
        async fn lookup(&self, user_id: &str) -> Result<Option<UserProfile>, LookupError> {
            self.calls.borrow_mut().push(user_id.to_string());
            if self.fail {
                return Err(LookupError::Remote("connection refused".into()));
            }
            Ok(self.profiles.get(user_id).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::testing::FixedLookup;
    use super::*;
    use crate::config::USER_KEY;
    use crate::core::storage::MemoryStore;

    #[test]
    fn no_stored_session_skips_the_lookup() {
        let store = MemoryStore::new();
        let lookup = FixedLookup::default();
        assert!(block_on(resolve_session(&store, &lookup)).unwrap().is_none());
        assert!(lookup.calls.borrow().is_empty());
    }

    #[test]
    fn stored_session_is_refreshed_by_identifier() {
        let store = MemoryStore::with_entries([(USER_KEY, r#"{"id": "5", "firstName": "Old"}"#)]);
        let mut fresh = UserProfile::new("5");
        fresh.first_name = Some("New".into());
        let lookup = FixedLookup::with(fresh.clone());

        let resolved = block_on(resolve_session(&store, &lookup)).unwrap();
        assert_eq!(resolved, Some(fresh));
        assert_eq!(lookup.calls.borrow().as_slice(), ["5".to_string()]);
    }

    #[test]
    fn empty_result_and_transport_failure_are_errors() {
        let store = MemoryStore::with_entries([(USER_KEY, r#"{"id": "5"}"#)]);
        assert!(matches!(
            block_on(resolve_session(&store, &FixedLookup::default())),
            Err(AuthError::EmptyProfile(id)) if id == "5"
        ));
        assert!(matches!(
            block_on(resolve_session(&store, &FixedLookup::failing())),
            Err(AuthError::Lookup(_))
        ));
    }

    #[test]
    fn sequencer_only_honours_latest_ticket() {
        let sequencer = AuthSequencer::default();
        let first = sequencer.begin();
        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
        sequencer.invalidate();
        assert!(!sequencer.is_current(second));
    }
}
