use crate::services::UpstreamCatalog;
use actix_web::web::{Data, Query};
use actix_web::{HttpResponse, Responder};
use podcast_api::{ErrorBody, PodcastsPage};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct PodcastsParams {
    page: Option<u32>,
    // The upstream page size is fixed by configuration.
    limit: Option<u32>,
    search: Option<String>,
}

pub(crate) async fn search_podcasts(
    catalog: Data<Arc<dyn UpstreamCatalog>>,
    params: Query<PodcastsParams>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    let page = params.page.unwrap_or(1).max(1);
    let search = params.search.as_deref().unwrap_or_default();

    info!(%request_id, page, search, limit = ?params.limit, "Searching podcasts");

    match catalog.search_podcasts(page, search).await {
        Ok(items) => {
            info!(%request_id, items = items.len(), "Podcast search completed");
            HttpResponse::Ok().json(PodcastsPage { items })
        }
        Err(error) => {
            error!(%request_id, ?error, "Podcast search failed");
            HttpResponse::InternalServerError().json(ErrorBody {
                error: format!("Error: {}", error),
            })
        }
    }
}

pub(crate) async fn preflight() -> impl Responder {
    HttpResponse::NoContent().finish()
}
