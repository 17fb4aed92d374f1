//! Shared components mounted by every platform shell.

pub mod app_navbar;
mod footer;
mod site_root;
pub mod slider;

pub use app_navbar::register_nav;
pub use app_navbar::AppNavbar;
pub use app_navbar::NavBuilder;
pub use footer::SiteFooter;
pub use site_root::SiteRoot;
