use podcast_api::{PodcastImages, PodcastItem, PodcastMetadata};

pub(crate) fn podcast(id: u64) -> PodcastItem {
    PodcastItem {
        id: id.into(),
        title: format!("Podcast {}", id),
        description: format!("Episode notes of podcast {}", id),
        images: PodcastImages {
            default: format!("https://img.example/{}/default.jpg", id),
            featured: format!("https://img.example/{}/featured.jpg", id),
            thumbnail: format!("https://img.example/{}/thumbnail.jpg", id),
            wide: format!("https://img.example/{}/wide.jpg", id),
        },
        metadata: PodcastMetadata::default(),
    }
}

/// `count` podcasts with ids starting right after `offset`.
pub(crate) fn podcasts(offset: u64, count: usize) -> Vec<PodcastItem> {
    (offset + 1..=offset + count as u64).map(podcast).collect()
}
