//! Renders pages under an in-memory site and drives them through the
//! broadcaster, the same way the navbar does at runtime.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::UserProfile;
use dioxus::prelude::*;

use crate::config::USER_KEY;
use crate::core::auth::testing::FixedLookup;
use crate::core::auth::AuthState;
use crate::core::platform::testing::RecordingHost;
use crate::core::prefs::{Language, Theme};
use crate::core::storage::{KeyValueStore, MemoryStore};
use crate::i18n;
use crate::state::{use_site_provider_with, Site, SiteBackend};
use crate::views::Home;

thread_local! {
    static BACKEND: RefCell<Option<SiteBackend<FixedLookup>>> = const { RefCell::new(None) };
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[component]
fn Harness() -> Element {
    let site = use_site_provider_with(|| {
        BACKEND
            .with(|slot| slot.borrow_mut().take())
            .expect("backend installed before mounting")
    });
    SITE.with(|slot| *slot.borrow_mut() = Some(site.clone()));
    rsx! { Home {} }
}

struct Page {
    dom: VirtualDom,
    runtime: tokio::runtime::Runtime,
    store: Rc<MemoryStore>,
    lookup: Rc<FixedLookup>,
}

impl Page {
    fn mount(store: MemoryStore, lookup: FixedLookup) -> Self {
        let store = Rc::new(store);
        let lookup = Rc::new(lookup);
        BACKEND.with(|slot| {
            *slot.borrow_mut() = Some(SiteBackend {
                store: store.clone(),
                host: Rc::new(RecordingHost::default()),
                lookup: lookup.clone(),
            })
        });

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();

        let mut page = Self {
            dom,
            runtime,
            store,
            lookup,
        };
        page.settle();
        page
    }

    /// Run queued tasks and re-renders until nothing happens for a moment.
    fn settle(&mut self) {
        let Page { dom, runtime, .. } = self;
        runtime.block_on(async {
            while tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
                .await
                .is_ok()
            {
                dom.render_immediate_to_vec();
            }
        });
    }

    fn site(&self) -> Site {
        SITE.with(|slot| slot.borrow().clone()).expect("harness rendered")
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn auth(&self) -> AuthState {
        let auth = self.site().signals.auth;
        self.dom.in_runtime(|| (*auth.peek()).clone())
    }

    fn lookups(&self) -> usize {
        self.lookup.calls.borrow().len()
    }
}

fn miner(id: &str) -> UserProfile {
    let mut profile = UserProfile::new(id);
    profile.first_name = Some("Nimal".into());
    profile.role = Some("miner".into());
    profile
}

#[test]
fn language_switch_retranslates_every_landing_section() {
    let _guard = i18n::test_lock();
    let mut page = Page::mount(MemoryStore::new(), FixedLookup::default());

    let english = page.html();
    assert!(english.contains("KEY SERVICES"));
    assert!(english.contains("Interactive Map"));
    assert!(english.contains("All rights reserved"));

    assert_eq!(page.site().broadcaster.toggle_language(), Language::Sinhala);
    page.settle();
    let sinhala = page.html();

    // Section heading, service card, hero subtitle and footer.
    assert!(sinhala.contains("ප්‍රධාන සේවා"));
    assert!(sinhala.contains("සිතියම"));
    assert!(!sinhala.contains("Interactive Map"));
    assert!(sinhala.contains("ශ්‍රී ලංකාවේ ඛනිජ"));
    assert!(sinhala.contains("සියලු හිමිකම් ඇවිරිණි"));
    assert!(!sinhala.contains("All rights reserved"));

    i18n::apply(Language::English);
}

#[test]
fn stored_session_is_checked_on_start_and_on_language_change() {
    let _guard = i18n::test_lock();
    let store = MemoryStore::with_entries([(USER_KEY, r#"{"id": "8"}"#)]);
    let mut page = Page::mount(store, FixedLookup::with(miner("8")));

    assert_eq!(page.lookups(), 1);
    assert_eq!(page.auth(), AuthState::Authenticated(miner("8")));

    page.site().broadcaster.toggle_language();
    page.settle();
    assert_eq!(page.lookups(), 2);

    page.site().broadcaster.toggle_theme();
    page.settle();
    assert_eq!(page.lookups(), 2);
    let theme = page.site().signals.theme;
    assert_eq!(page.dom.in_runtime(|| *theme.peek()), Theme::Dark);

    i18n::apply(Language::English);
}

#[test]
fn auth_notification_rechecks_and_updates_the_signal() {
    let _guard = i18n::test_lock();
    let store = MemoryStore::with_entries([(USER_KEY, r#"{"id": "8"}"#)]);
    let mut page = Page::mount(store, FixedLookup::with(miner("8")));
    assert!(page.auth().is_authenticated());

    // Signed out in another tab: the session is gone from shared storage.
    page.store.remove(USER_KEY).unwrap();
    page.site().broadcaster.notify_auth_changed();
    page.settle();

    assert_eq!(page.auth(), AuthState::Unauthenticated);
    assert_eq!(page.lookups(), 1);

    page.store.set(USER_KEY, r#"{"id": "8"}"#).unwrap();
    page.site().broadcaster.notify_auth_changed();
    page.settle();

    assert_eq!(page.lookups(), 2);
    assert!(page.auth().is_authenticated());
}
