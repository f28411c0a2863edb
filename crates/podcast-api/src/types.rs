use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

// PodcastId
#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Serialize)]
pub struct PodcastId(pub(crate) u64);

impl Deref for PodcastId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u64> for PodcastId {
    fn from(value: u64) -> Self {
        PodcastId(value)
    }
}

impl std::fmt::Display for PodcastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The upstream catalog sends ids as decimal strings, our own API sends numbers.
impl<'de> Deserialize<'de> for PodcastId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Ok(PodcastId(id)),
            RawId::Text(text) => text
                .trim()
                .parse::<u64>()
                .map(PodcastId)
                .map_err(|_| D::Error::custom(format!("invalid podcast id: {:?}", text))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastImages {
    pub default: String,
    pub featured: String,
    pub thumbnail: String,
    pub wide: String,
}

/// Catalog metadata the upstream attaches to every podcast. None of it is
/// required by the search page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_exclusive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_free_episodes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_sequence: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastItem {
    pub id: PodcastId,
    pub title: String,
    pub description: String,
    pub images: PodcastImages,
    #[serde(flatten)]
    pub metadata: PodcastMetadata,
}

/// One page of search results as returned by `GET /api/podcasts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastsPage {
    pub items: Vec<PodcastItem>,
}

/// Body of an error response from the catalog API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Query string of `GET /api/podcasts`. An empty search text is never sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PodcastQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PodcastQuery {
    pub fn new(page: u32, limit: u32, text: &str) -> Self {
        let search = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };

        Self {
            page,
            limit,
            search,
        }
    }

    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}
