use crate::{PodcastQuery, PodcastsPage};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const PODCASTS_PATH: &str = "/api/podcasts";

#[derive(Debug, thiserror::Error)]
pub enum PodcastApiError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error("Network response was not ok: {0}")]
    UnexpectedStatus(StatusCode),
    #[error("Unable to decode response body: {0}")]
    DecodeError(#[from] serde_json::Error),
}

/// Source of podcast search results.
#[async_trait]
pub trait PodcastCatalog: Send + Sync {
    async fn fetch_podcasts(&self, query: &PodcastQuery) -> Result<PodcastsPage, PodcastApiError>;
}

pub struct PodcastApiClient {
    client: Client,
    endpoint: String,
}

impl PodcastApiClient {
    pub fn create(base_url: &str, timeout: Duration) -> Result<Self, PodcastApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), PODCASTS_PATH);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PodcastCatalog for PodcastApiClient {
    async fn fetch_podcasts(&self, query: &PodcastQuery) -> Result<PodcastsPage, PodcastApiError> {
        debug!(?query, "Requesting podcasts");

        let response = self
            .client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PodcastApiError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        let page: PodcastsPage = serde_json::from_slice(&body)?;

        debug!(items = page.items.len(), "Received podcasts");

        Ok(page)
    }
}
