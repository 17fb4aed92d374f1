//! Browser backends over `web-sys`.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

use crate::config::{DARK_CLASS, PREFERS_DARK_QUERY, SESSION_COOKIE_CLEAR};
use crate::core::prefs::Theme;
use crate::core::storage::{KeyValueStore, StorageError};

use super::Host;

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

pub struct BrowserHost;

impl Host for BrowserHost {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn apply_theme(&self, theme: Theme) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(err) = root
                .class_list()
                .toggle_with_force(DARK_CLASS, theme.is_dark())
            {
                tracing::warn!("failed to toggle root theme class: {err:?}");
            }
        }
    }

    fn clear_session_cookie(&self) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok());
        match document {
            Some(document) => {
                if let Err(err) = document.set_cookie(SESSION_COOKIE_CLEAR) {
                    tracing::warn!("failed to clear session cookie: {err:?}");
                }
            }
            None => tracing::warn!("no HTML document; session cookie left in place"),
        }
    }

    fn redirect(&self, path: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.location().set_href(path).is_ok()
    }
}

/// Invoke `callback` whenever another tab changes `localStorage`.
pub fn listen_storage_events(mut callback: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| callback());
    if let Err(err) =
        window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
    {
        tracing::warn!("failed to subscribe to storage events: {err:?}");
        return;
    }
    // Lives for the lifetime of the page.
    closure.forget();
}
