//! Dioxus bindings for the [`Broadcaster`].
//!
//! The root component calls [`use_site_provider`] once; everything below it
//! reads [`use_site`]; tests mount [`use_site_provider_with`] over an
//! in-memory backend. Signals are only ever written from the broadcaster's
//! change stream, so components never drift from persisted state.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

#[cfg(not(target_arch = "wasm32"))]
use crate::config::PREFERS_DARK_QUERY;
use crate::core::auth::{AuthState, ProfileLookup, ServerLookup};
use crate::core::broadcaster::Broadcaster;
use crate::core::notify::Change;
use crate::core::platform::{default_host, default_store, Host, Platform};
use crate::core::prefs::{Language, Theme};
use crate::core::storage::KeyValueStore;
use crate::i18n;

#[derive(Clone, Copy, PartialEq)]
pub struct SiteSignals {
    pub theme: Signal<Theme>,
    pub language: Signal<Language>,
    pub auth: Signal<AuthState>,
}

#[derive(Clone)]
pub struct Site {
    pub broadcaster: Rc<Broadcaster>,
    pub signals: SiteSignals,
}

impl Site {
    pub fn toggle_theme(&self) {
        self.broadcaster.toggle_theme();
    }

    pub fn toggle_language(&self) {
        self.broadcaster.toggle_language();
    }

    /// Sign out; `false` means the caller must route home itself.
    pub fn logout(&self) -> bool {
        self.broadcaster.logout()
    }
}

/// What the site state is built on: persistence, host effects and the
/// profile service used for session checks.
pub struct SiteBackend<L> {
    pub store: Rc<dyn KeyValueStore>,
    pub host: Rc<dyn Host>,
    pub lookup: Rc<L>,
}

impl SiteBackend<ServerLookup> {
    /// The running platform's store and host, checked against the server.
    pub fn platform() -> Self {
        let store = default_store();
        Self {
            host: default_host(store.clone()),
            store,
            lookup: Rc::new(ServerLookup),
        }
    }
}

/// Build the broadcaster, expose it through context and start listening.
pub fn use_site_provider() -> Site {
    use_site_provider_with(SiteBackend::platform)
}

/// [`use_site_provider`] over an explicit backend. `backend` runs once, on
/// the first render.
pub fn use_site_provider_with<L: ProfileLookup + 'static>(
    backend: impl FnOnce() -> SiteBackend<L>,
) -> Site {
    let (broadcaster, lookup) = use_hook(|| {
        let SiteBackend {
            store,
            host,
            lookup,
        } = backend();
        let broadcaster = Rc::new(Broadcaster::new(store, host));
        i18n::apply(broadcaster.language());
        tracing::info!(
            platform = Platform::current().as_str(),
            theme = broadcaster.theme().as_str(),
            language = broadcaster.language().code(),
            "site state ready"
        );
        (broadcaster, lookup)
    });

    let theme = use_signal(|| broadcaster.theme());
    let language = use_signal(|| broadcaster.language());
    let auth = use_signal(|| broadcaster.auth());
    let signals = SiteSignals {
        theme,
        language,
        auth,
    };

    let site = use_context_provider(|| Site {
        broadcaster: broadcaster.clone(),
        signals,
    });

    use_hook(|| {
        let mut changes = broadcaster.subscribe();
        broadcaster.initialise();

        let listener = broadcaster.clone();
        spawn(async move {
            while let Some(change) = changes.next().await {
                if apply_change(&listener, signals, change) {
                    refresh_auth(listener.clone(), signals.auth, lookup.clone());
                }
            }
        });

        // `initialise` announced the stored language above, which queues the
        // first session check through the listener.

        #[cfg(target_arch = "wasm32")]
        {
            let relay = broadcaster.clone();
            crate::core::platform::listen_storage_events(move || relay.notify_auth_changed());
        }

        #[cfg(not(target_arch = "wasm32"))]
        follow_system_theme(broadcaster.clone());
    });

    site
}

pub fn use_site() -> Site {
    use_context::<Site>()
}

/// Mirror one change onto the signals. Returns `true` when the session has
/// to be checked again.
fn apply_change(broadcaster: &Broadcaster, signals: SiteSignals, change: Change) -> bool {
    let SiteSignals {
        mut theme,
        mut language,
        mut auth,
    } = signals;
    match change {
        Change::Theme(next) => {
            theme.set(next);
            false
        }
        Change::Language(next) => {
            i18n::apply(next);
            language.set(next);
            true
        }
        Change::Auth => {
            auth.set(broadcaster.auth());
            true
        }
    }
}

fn refresh_auth<L: ProfileLookup + 'static>(
    broadcaster: Rc<Broadcaster>,
    mut auth: Signal<AuthState>,
    lookup: Rc<L>,
) {
    spawn(async move {
        let state = broadcaster.check_auth(&*lookup).await;
        auth.set(state);
    });
}

/// Native webviews only report `prefers-color-scheme` once a script runs.
#[cfg(not(target_arch = "wasm32"))]
fn follow_system_theme(broadcaster: Rc<Broadcaster>) {
    spawn(async move {
        let script = format!("dioxus.send(window.matchMedia('{PREFERS_DARK_QUERY}').matches);");
        let mut eval = document::eval(&script);
        match eval.recv::<bool>().await {
            Ok(dark) => {
                broadcaster.adopt_system_theme(dark);
            }
            Err(err) => tracing::debug!("system theme unavailable: {err:?}"),
        }
    });
}

/// Subscribe the calling component to language changes so its `t!` lookups
/// re-render with the new bundle.
pub fn use_language() -> Language {
    let language = use_site().signals.language;
    language()
}
