use std::env;

use tracing::{info, warn};

use crate::error::DorkError;
use crate::search::DEFAULT_SEARCH_URL;

pub const DEFAULT_FAST_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_DEEP_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_SUGGEST_MODEL: &str = "gemini-flash-lite-latest";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Not validated up front; a bad or missing key surfaces on the first call.
    pub gemini_api_key: String,
    /// Overrides the public endpoint (local mocks, proxies).
    pub gemini_base_url: Option<String>,

    pub fast_model: String,
    pub deep_model: String,
    pub suggest_model: String,
    pub chat_model: String,

    pub search_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_base_url: None,
            fast_model: DEFAULT_FAST_MODEL.to_string(),
            deep_model: DEFAULT_DEEP_MODEL.to_string(),
            suggest_model: DEFAULT_SUGGEST_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Every variable is optional.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let gemini_api_key = get("GEMINI_API_KEY")
            .or_else(|| get("API_KEY"))
            .unwrap_or_default();

        Self {
            gemini_api_key,
            gemini_base_url: get("GEMINI_BASE_URL"),
            fast_model: get("DORK_FAST_MODEL").unwrap_or(defaults.fast_model),
            deep_model: get("DORK_DEEP_MODEL").unwrap_or(defaults.deep_model),
            suggest_model: get("DORK_SUGGEST_MODEL").unwrap_or(defaults.suggest_model),
            chat_model: get("DORK_CHAT_MODEL").unwrap_or(defaults.chat_model),
            search_url: get("DORK_SEARCH_URL").unwrap_or(defaults.search_url),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }

    /// Reject endpoint overrides that are not http(s) URLs.
    pub fn validate(&self) -> Result<(), DorkError> {
        let urls = [
            ("DORK_SEARCH_URL", Some(self.search_url.as_str())),
            ("GEMINI_BASE_URL", self.gemini_base_url.as_deref()),
        ];
        for (key, url) in urls {
            if let Some(url) = url {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(DorkError::Config(format!("{key} must be an http(s) URL, got '{url}'")));
                }
            }
        }
        Ok(())
    }

    /// Log the effective configuration with the API key redacted.
    pub fn log_redacted(&self) {
        info!(
            api_key = if self.has_api_key() { "set" } else { "unset" },
            base_url = self.gemini_base_url.as_deref().unwrap_or("default"),
            fast_model = self.fast_model.as_str(),
            deep_model = self.deep_model.as_str(),
            suggest_model = self.suggest_model.as_str(),
            chat_model = self.chat_model.as_str(),
            search_url = self.search_url.as_str(),
            "Config loaded"
        );
        if !self.has_api_key() {
            warn!("GEMINI_API_KEY is not set; AI features will fail until it is");
        }
    }
}
