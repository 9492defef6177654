//! Build-time configuration.
//!
//! The backend base URL is baked in at compile time. `PORTAL_API_BASE`
//! overrides the default, so deployments against another backend rebuild
//! with the variable set instead of patching a constant.

use crate::utils::constants::DEFAULT_API_BASE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base: option_env!("PORTAL_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
        }
    }
}

/// Base URL for backend API requests.
pub fn api_base() -> String {
    AppConfig::from_env().api_base
}
