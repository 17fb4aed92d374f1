//! Shared UI crate for CeylonMine. The navbar, the landing and about pages,
//! and the state they share live here; platform crates only add routing.

pub mod config;
pub mod content;
pub mod core;
pub mod i18n;
pub mod routes;
pub mod state;
pub mod views;

pub mod components;

pub use routes::NavTarget;

use dioxus::prelude::*;

/// Shared stylesheet; web links it, desktop embeds the file directly.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
