//! Single writer for theme, language and session state.
//!
//! The navbar owns one [`Broadcaster`] (shared through Dioxus context) and is
//! the only caller of its mutating operations. Every mutation is persisted,
//! reflected on the host and then published to subscribers, so pages that
//! never see the navbar still converge on the same state.

use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::mpsc::UnboundedReceiver;

use super::auth::{resolve_session, AuthSequencer, AuthState, ProfileLookup};
use super::notify::{Change, Notifier};
use super::platform::Host;
use super::prefs::{Language, Preferences, Theme};
use super::session;
use super::storage::KeyValueStore;
use crate::config::{HOME_ROUTE, LANGUAGE_KEY, THEME_KEY};

pub struct Broadcaster {
    store: Rc<dyn KeyValueStore>,
    host: Rc<dyn Host>,
    notifier: Notifier,
    sequencer: AuthSequencer,
    preferences: RefCell<Preferences>,
    auth: RefCell<AuthState>,
}

impl Broadcaster {
    pub fn new(store: Rc<dyn KeyValueStore>, host: Rc<dyn Host>) -> Self {
        let preferences = Preferences::load(&*store, &*host);
        Self {
            store,
            host,
            notifier: Notifier::default(),
            sequencer: AuthSequencer::default(),
            preferences: RefCell::new(preferences),
            auth: RefCell::new(AuthState::Unauthenticated),
        }
    }

    /// Apply the loaded theme and announce both preferences once so late
    /// subscribers start from the persisted values.
    pub fn initialise(&self) {
        let Preferences { theme, language } = self.preferences();
        self.host.apply_theme(theme);
        self.notifier.publish(Change::Theme(theme));
        self.notifier.publish(Change::Language(language));
    }

    pub fn preferences(&self) -> Preferences {
        *self.preferences.borrow()
    }

    pub fn theme(&self) -> Theme {
        self.preferences.borrow().theme
    }

    pub fn language(&self) -> Language {
        self.preferences.borrow().language
    }

    pub fn auth(&self) -> AuthState {
        self.auth.borrow().clone()
    }

    pub fn subscribe(&self) -> UnboundedReceiver<Change> {
        self.notifier.subscribe()
    }

    /// Announce that the session changed outside the navbar (sign-in page,
    /// another tab).
    pub fn notify_auth_changed(&self) {
        self.notifier.publish(Change::Auth);
    }

    pub fn toggle_theme(&self) -> Theme {
        let theme = {
            let mut prefs = self.preferences.borrow_mut();
            prefs.theme = prefs.theme.toggled();
            prefs.theme
        };
        self.persist(THEME_KEY, theme.as_str());
        self.host.apply_theme(theme);
        tracing::info!(theme = theme.as_str(), "theme toggled");
        self.notifier.publish(Change::Theme(theme));
        theme
    }

    pub fn toggle_language(&self) -> Language {
        let language = {
            let mut prefs = self.preferences.borrow_mut();
            prefs.language = prefs.language.next();
            prefs.language
        };
        self.persist(LANGUAGE_KEY, language.code());
        tracing::info!(language = language.code(), "language toggled");
        self.notifier.publish(Change::Language(language));
        language
    }

    /// Follow a system colour scheme that was only learned after start-up
    /// (native webviews). Ignored once the user has stored a theme; the
    /// adopted theme is applied and announced but never persisted.
    pub fn adopt_system_theme(&self, prefers_dark: bool) -> Option<Theme> {
        if self.store.get(THEME_KEY).as_deref().and_then(Theme::parse).is_some() {
            return None;
        }
        let theme = Theme::resolve(None, prefers_dark);
        {
            let mut prefs = self.preferences.borrow_mut();
            if prefs.theme == theme {
                return None;
            }
            prefs.theme = theme;
        }
        self.host.apply_theme(theme);
        tracing::info!(theme = theme.as_str(), "following system theme");
        self.notifier.publish(Change::Theme(theme));
        Some(theme)
    }

    /// Confirm the stored session against the profile service.
    ///
    /// Any failure clears the local session. When a newer check starts (or a
    /// logout happens) before this one resolves, its result is discarded and
    /// the current state is returned untouched.
    pub async fn check_auth<L: ProfileLookup>(&self, lookup: &L) -> AuthState {
        let ticket = self.sequencer.begin();
        let outcome = resolve_session(&*self.store, lookup).await;

        if !self.sequencer.is_current(ticket) {
            tracing::debug!("discarding superseded auth check");
            return self.auth();
        }

        let next = match outcome {
            Ok(Some(profile)) => {
                if let Err(err) = session::persist_session(&*self.store, &profile) {
                    tracing::warn!("failed to persist refreshed profile: {err}");
                }
                AuthState::Authenticated(profile)
            }
            Ok(None) => AuthState::Unauthenticated,
            Err(err) => {
                tracing::warn!("session check failed, signing out: {err}");
                session::clear_session(&*self.store, &*self.host);
                AuthState::Unauthenticated
            }
        };
        *self.auth.borrow_mut() = next.clone();
        next
    }

    /// Sign out. Returns `true` when the host performed a full-page redirect
    /// to the home route; otherwise the caller navigates in-app.
    pub fn logout(&self) -> bool {
        self.sequencer.invalidate();
        session::clear_session(&*self.store, &*self.host);
        *self.auth.borrow_mut() = AuthState::Unauthenticated;
        tracing::info!("signed out");
        self.notifier.publish(Change::Auth);
        self.host.redirect(HOME_ROUTE)
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, "failed to persist preference: {err}");
        }
    }
}
