use async_trait::async_trait;
use podcast_api::PodcastItem;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CatalogClientError {
    #[error("error making the request: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("unexpected upstream status: {0}")]
    UnexpectedStatus(StatusCode),
    #[error("error decoding JSON: {0}")]
    DecodeError(#[from] serde_json::Error),
}

/// The catalog the proxy forwards searches to.
#[async_trait]
pub(crate) trait UpstreamCatalog: Send + Sync {
    async fn search_podcasts(
        &self,
        page: u32,
        search: &str,
    ) -> Result<Vec<PodcastItem>, CatalogClientError>;
}

pub(crate) struct CatalogClient {
    client: Client,
    url: String,
    page_size: u32,
}

impl CatalogClient {
    pub(crate) fn create(
        url: &str,
        page_size: u32,
        timeout: Duration,
    ) -> Result<Self, CatalogClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            page_size,
        })
    }
}

#[async_trait]
impl UpstreamCatalog for CatalogClient {
    async fn search_podcasts(
        &self,
        page: u32,
        search: &str,
    ) -> Result<Vec<PodcastItem>, CatalogClientError> {
        #[derive(Serialize)]
        struct Query<'a> {
            p: u32,
            l: u32,
            search: &'a str,
        }

        let query = Query {
            p: page,
            l: self.page_size,
            search,
        };

        let response = self.client.get(&self.url).query(&query).send().await?;

        let status = response.status();
        debug!(%status, page, search, "Upstream catalog responded");

        // The upstream answers 404 when a search has no matches.
        if status == StatusCode::NOT_FOUND {
            return Ok(vec![]);
        }

        if !status.is_success() {
            return Err(CatalogClientError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
