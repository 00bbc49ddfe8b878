//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and backend endpoint paths so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "pageload";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.pageload.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".pageload.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "pageload";

// ── Backend endpoints ───────────────────────────────────────────────

/// Path of the "all users" listing, relative to the base URL.
pub const USERS_PATH: &str = "/";

/// Path of the login endpoint, relative to the base URL.
pub const LOGIN_PATH: &str = "/auth/login";

/// First name sent in the login payload when nothing else is configured.
pub const DEFAULT_FIRST_NAME: &str = "Alice";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_SERVER_URL: &str = "SERVER_URL";
pub const ENV_TIMEOUT_SECS: &str = "PAGELOAD_TIMEOUT_SECS";
pub const ENV_FIRST_NAME: &str = "PAGELOAD_FIRST_NAME";
pub const ENV_LOG: &str = "PAGELOAD_LOG";
