use podcast_api::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::time::Duration;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30u64
}

fn default_upstream_url() -> String {
    "https://601f1754b5a0e9001706a292.mockapi.io/podcasts".to_string()
}

fn default_upstream_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_upstream_timeout() -> u64 {
    10u64
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_bind_address")]
    pub(crate) bind_address: String,
    #[serde(default = "default_shutdown_timeout")]
    pub(crate) shutdown_timeout: u64,
    #[serde(default = "default_upstream_url")]
    pub(crate) upstream_url: String,
    #[serde(default = "default_upstream_page_size")]
    pub(crate) upstream_page_size: u32,
    #[serde(default = "default_upstream_timeout")]
    pub(crate) upstream_timeout: u64,
}

impl Config {
    pub(crate) fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    pub(crate) fn from_env() -> Self {
        match envy::from_env::<Self>() {
            Ok(config) => config,
            Err(error) => panic!("Invalid environment variable: {:#?}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();

        assert_eq!("0.0.0.0:8080", config.bind_address);
        assert_eq!(30, config.shutdown_timeout);
        assert_eq!(default_upstream_url(), config.upstream_url);
        assert_eq!(10, config.upstream_page_size);
    }

    #[test]
    fn test_upstream_overrides() {
        let config: Config = envy::from_iter(vec![
            ("UPSTREAM_URL".to_string(), "http://mock/podcasts".to_string()),
            ("UPSTREAM_PAGE_SIZE".to_string(), "25".to_string()),
            ("UPSTREAM_TIMEOUT".to_string(), "3".to_string()),
        ])
        .unwrap();

        assert_eq!("http://mock/podcasts", config.upstream_url);
        assert_eq!(25, config.upstream_page_size);
        assert_eq!(Duration::from_secs(3), config.upstream_timeout());
    }
}
