//! Desktop / mobile backends: a JSON preference file and a router-driven host.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::SESSION_COOKIE;
use crate::core::prefs::Theme;
use crate::core::storage::{KeyValueStore, StorageError};

use super::Host;

const FILE_NAME: &str = "preferences.json";

/// Key/value store persisted as a flat JSON object. The whole file is
/// rewritten on every change; it only ever holds a handful of entries.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("lk", "CeylonMine", "CeylonMine")
            .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
        Self::open(dirs.data_dir().join(FILE_NAME))
    }

    /// Open (or lazily create) the store at `path`. A corrupt file is logged
    /// and treated as empty; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), "discarding unreadable preference file: {err}");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(&*self.entries.borrow())?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        if previous.as_deref() == Some(value) {
            return Ok(());
        }
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.entries.borrow_mut().remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}

/// Native shells have no cookie jar or page loads: the session token lives
/// next to the preferences and redirects are left to the router.
pub struct NativeHost {
    store: Rc<dyn KeyValueStore>,
}

impl NativeHost {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl Host for NativeHost {
    /// Not known until the webview answers a `matchMedia` query; the site
    /// provider then hands the answer to `Broadcaster::adopt_system_theme`.
    fn prefers_dark(&self) -> bool {
        false
    }

    fn apply_theme(&self, theme: Theme) {
        // The shell's root element carries the theme class.
        tracing::debug!(theme = theme.as_str(), "theme applied");
    }

    fn clear_session_cookie(&self) {
        if let Err(err) = self.store.remove(SESSION_COOKIE) {
            tracing::warn!("failed to clear stored session token: {err}");
        }
    }

    fn redirect(&self, _path: &str) -> bool {
        false
    }
}
