//! Profile directory backing `lookup_profile` on the server.
//!
//! Production deployments proxy the lookup to the accounts service; for local
//! runs the directory is seeded from a JSON array of profiles named by the
//! `CEYLONMINE_PROFILES` environment variable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::UserProfile;

/// Environment variable naming the JSON seed file.
pub const PROFILES_ENV: &str = "CEYLONMINE_PROFILES";

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read profile file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("profile file {path} is not a JSON array of profiles: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone)]
pub struct ProfileDirectory {
    profiles: HashMap<String, UserProfile>,
}

static SHARED: Lazy<ProfileDirectory> = Lazy::new(|| match std::env::var_os(PROFILES_ENV) {
    Some(path) => ProfileDirectory::load(Path::new(&path)).unwrap_or_else(|err| {
        tracing::warn!("{err}; serving an empty profile directory");
        ProfileDirectory::default()
    }),
    None => {
        tracing::info!("{PROFILES_ENV} not set; serving an empty profile directory");
        ProfileDirectory::default()
    }
});

impl ProfileDirectory {
    /// Process-wide directory, loaded on first use.
    pub fn shared() -> &'static ProfileDirectory {
        &SHARED
    }

    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json(&raw).map_err(|source| DirectoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(count = directory.len(), path = %path.display(), "loaded profile directory");
        Ok(directory)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let list: Vec<UserProfile> = serde_json::from_str(raw)?;
        Ok(list.into_iter().collect())
    }

    pub fn find(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles.get(user_id.trim()).cloned()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<UserProfile> for ProfileDirectory {
    fn from_iter<I: IntoIterator<Item = UserProfile>>(iter: I) -> Self {
        Self {
            profiles: iter
                .into_iter()
                .map(|profile| (profile.id.clone(), profile))
                .collect(),
        }
    }
}
