//! Platform detection and the host seam for browser-global effects.
//!
//! Everything the broadcaster needs from its surroundings beyond storage
//! (system colour scheme, the document root class, the session cookie and
//! full-page redirects) goes through [`Host`]. The web build talks to the DOM
//! via `web-sys`; native shells keep the cookie in the preference file and
//! leave redirects to the router.

use std::rc::Rc;

use super::prefs::Theme;
use super::storage::{KeyValueStore, MemoryStore};

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{FileStore, NativeHost};
#[cfg(target_arch = "wasm32")]
pub use web::{listen_storage_events, BrowserHost, LocalStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
            Platform::Mobile => "mobile",
        }
    }
}

/// Side effects on the surrounding document / process.
pub trait Host {
    /// Whether the system asks for a dark colour scheme.
    fn prefers_dark(&self) -> bool;

    /// Reflect the theme on the document root.
    fn apply_theme(&self, theme: Theme);

    /// Expire the session cookie.
    fn clear_session_cookie(&self);

    /// Perform a full-page navigation. Returns `false` when the host cannot
    /// and the caller should route in-app instead.
    fn redirect(&self, path: &str) -> bool;
}

/// Open the platform's persistent store, falling back to memory.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    let opened = LocalStore::open();
    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStore::open_default();

    match opened {
        Ok(store) => Rc::new(store),
        Err(err) => {
            tracing::warn!("persistent storage unavailable ({err}); preferences will not survive a restart");
            Rc::new(MemoryStore::new())
        }
    }
}

pub fn default_host(store: Rc<dyn KeyValueStore>) -> Rc<dyn Host> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = store;
        Rc::new(BrowserHost)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(NativeHost::new(store))
    }
}
