//! Build-time configuration of the frontend.
//!
//! The bundle is static, so settings are baked in when it is compiled:
//! `CLINIC_API_BASE=https://api.example.com trunk build` points the client at
//! a different API origin. Without it, requests go to the page's own origin.

use log::LevelFilter;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "clinica_token";

/// How long toast notifications stay on screen.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Origin of the REST API, without trailing slash. Empty means same origin.
pub fn api_base() -> &'static str {
    option_env!("CLINIC_API_BASE")
        .unwrap_or("")
        .trim_end_matches('/')
}

/// Absolute or origin-relative URL for an API path such as `/api/auth/me`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Console log level: everything in debug builds, `info` and up otherwise.
pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
