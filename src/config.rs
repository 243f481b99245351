//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! WASM bundles have no process environment, so values are baked in at build
//! time through `option_env!` and fall back to defaults when unset or invalid.
//! The resolved config is provided to views through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// `localStorage` key the login flow writes the bearer token under.
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "FBIdToken";
/// Default API origin used when `PEER_REVIEW_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
/// Rows per page in paginated admin lists.
pub const DEFAULT_PAGE_SIZE: u32 = 15;
/// How long before token expiry the "Session expired" notice fires.
///
/// Kept at 30 ms to match the deployed behavior; see DESIGN.md before
/// changing it to seconds.
pub const DEFAULT_EXPIRY_NOTICE_LEAD: Duration = Duration::from_millis(30);

/// Resolved client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub token_storage_key: String,
    pub page_size: u32,
    pub expiry_notice_lead: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            expiry_notice_lead: DEFAULT_EXPIRY_NOTICE_LEAD,
        }
    }
}

impl ClientConfig {
    /// Build from compile-time environment variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PEER_REVIEW_API_BASE"), option_env!("PEER_REVIEW_PAGE_SIZE"))
    }

    fn from_values(api_base: Option<&str>, page_size: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/').to_owned())
            .filter(|base| !base.is_empty())
            .unwrap_or(defaults.api_base);
        let page_size = try_load("PEER_REVIEW_PAGE_SIZE", page_size, defaults.page_size);
        let page_size = if page_size == 0 {
            log::warn!("PEER_REVIEW_PAGE_SIZE must be positive, using default: {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { api_base, page_size, ..defaults }
    }
}

fn try_load<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        log::info!("{key} not set, using default: {default}");
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Invalid {key} value: {e}, using default: {default}");
            default
        }
    }
}
