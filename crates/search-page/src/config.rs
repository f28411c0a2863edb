use crate::state::StaleDataPolicy;
use podcast_api::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::time::Duration;

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    500u64
}

fn default_request_timeout_secs() -> u64 {
    30u64
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchPageConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub clear_results_on_error: bool,
}

impl SearchPageConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Self>()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn stale_data_policy(&self) -> StaleDataPolicy {
        if self.clear_results_on_error {
            StaleDataPolicy::Clear
        } else {
            StaleDataPolicy::Keep
        }
    }
}

impl Default for SearchPageConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            clear_results_on_error: false,
        }
    }
}
