//! Platform-agnostic state behind the views: preferences, session, the
//! broadcaster that keeps them in sync, and carousel cursors.

pub mod auth;
pub mod broadcaster;
pub mod carousel;
pub mod notify;
pub mod platform;
pub mod prefs;
pub mod session;
pub mod storage;
pub mod timing;
