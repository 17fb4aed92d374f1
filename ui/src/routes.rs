//! Every destination the shared views link to.
//!
//! Only `Home` and `About` are rendered by this workspace; the rest belong
//! to sibling services and are reached by path. Platform crates map these
//! onto their own `Route` enums through `NavBuilder`.

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Map,
    Minebot,
    Royalty,
    Complaints,
    Licenses,
    Minemore,
    About,
    Contact,
    SignIn,
    Dashboard,
}

impl NavTarget {
    /// Primary navbar entries, in display order.
    pub const PRIMARY: [NavTarget; 9] = [
        NavTarget::Home,
        NavTarget::Map,
        NavTarget::Minebot,
        NavTarget::Royalty,
        NavTarget::Complaints,
        NavTarget::Licenses,
        NavTarget::Minemore,
        NavTarget::About,
        NavTarget::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Map => "/map",
            NavTarget::Minebot => "/minebot",
            NavTarget::Royalty => "/royalty",
            NavTarget::Complaints => "/complains",
            NavTarget::Licenses => "/license-portal",
            NavTarget::Minemore => "/minemore",
            NavTarget::About => "/about",
            NavTarget::Contact => "/contact",
            NavTarget::SignIn => "/sign",
            NavTarget::Dashboard => "/constructor",
        }
    }

    /// Whether this workspace renders the destination itself.
    pub fn is_local(self) -> bool {
        matches!(self, NavTarget::Home | NavTarget::About)
    }

    /// Localized link text for the active language.
    pub fn label(self) -> String {
        match self {
            NavTarget::Home => t!("nav-home"),
            NavTarget::Map => t!("nav-map"),
            NavTarget::Minebot => t!("nav-minebot"),
            NavTarget::Royalty => t!("nav-royalty"),
            NavTarget::Complaints => t!("nav-complaints"),
            NavTarget::Licenses => t!("nav-licenses"),
            NavTarget::Minemore => t!("nav-minemore"),
            NavTarget::About => t!("nav-about"),
            NavTarget::Contact => t!("nav-contact"),
            NavTarget::SignIn => t!("auth-signup"),
            NavTarget::Dashboard => t!("auth-dashboard"),
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::PRIMARY
            .into_iter()
            .chain([NavTarget::SignIn, NavTarget::Dashboard])
            .find(|target| target.path() == normalized)
    }
}
