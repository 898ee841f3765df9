//! Deployment settings for the landing page.
//!
//! The page ships as a static wasm bundle, so settings are baked in at build
//! time from `IGNITION_*` environment variables. The web binary provides the
//! resolved [`LandingConfig`] as context; views read it with
//! [`use_landing_config`] and fall back to the defaults when rendered on
//! their own (tests, previews).

use api::{Endpoints, DEFAULT_API_BASE};
use dioxus::prelude::*;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_LOGOUT_PATH: &str = "/logout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingConfig {
    /// Prefix of the JSON API (`IGNITION_API_BASE`).
    pub api_base: String,
    /// Where a 401 sends the browser (`IGNITION_LOGIN_PATH`).
    pub login_path: String,
    /// Sign-out link on the forbidden page (`IGNITION_LOGOUT_PATH`).
    pub logout_path: String,
    /// Apps Manager base URL used to build org links (`IGNITION_APPS_URL`).
    pub apps_url: Option<String>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            logout_path: DEFAULT_LOGOUT_PATH.to_string(),
            apps_url: None,
        }
    }
}

impl LandingConfig {
    /// Resolve from the variables captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "IGNITION_API_BASE" => option_env!("IGNITION_API_BASE"),
                "IGNITION_LOGIN_PATH" => option_env!("IGNITION_LOGIN_PATH"),
                "IGNITION_LOGOUT_PATH" => option_env!("IGNITION_LOGOUT_PATH"),
                "IGNITION_APPS_URL" => option_env!("IGNITION_APPS_URL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Resolve from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_base: get("IGNITION_API_BASE").unwrap_or(defaults.api_base),
            login_path: get("IGNITION_LOGIN_PATH").unwrap_or(defaults.login_path),
            logout_path: get("IGNITION_LOGOUT_PATH").unwrap_or(defaults.logout_path),
            apps_url: get("IGNITION_APPS_URL"),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }
}

/// The config provided by the platform crate, or the defaults.
pub fn use_landing_config() -> LandingConfig {
    try_use_context::<LandingConfig>().unwrap_or_default()
}
