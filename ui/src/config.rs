//! Compile-time settings shared by the views and the session layer.

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Storage key holding the language code (`"en"`, `"si"`, `"ta"`).
pub const LANGUAGE_KEY: &str = "language";

/// Storage key holding the JSON-serialized signed-in profile.
pub const USER_KEY: &str = "user";

/// Session cookie set by the sign-in service.
pub const SESSION_COOKIE: &str = "token";

/// Cookie assignment that expires the session cookie.
pub const SESSION_COOKIE_CLEAR: &str =
    "token=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; secure; samesite=strict";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Media query used to derive the default theme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Hero slider auto-advance period.
pub const HERO_INTERVAL_MS: u64 = 5_000;

/// Scroll offset after which the navbar drops its transparent style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Route that `logout` redirects to.
pub const HOME_ROUTE: &str = "/";

/// Brand shown in the navbar, page titles and footer.
pub const BRAND: &str = "CeylonMine";
