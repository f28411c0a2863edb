mod health;
mod podcasts;

use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

pub(crate) use health::health_check;
pub(crate) use podcasts::{preflight, search_podcasts};

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/podcasts")
            .route(web::get().to(search_podcasts))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(web::resource("/health").route(web::get().to(health_check)));
}

/// The search page is served from another origin.
pub(crate) fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

#[cfg(test)]
mod tests {
    use super::{configure, cors_headers};
    use crate::services::{CatalogClientError, UpstreamCatalog};
    use actix_web::http::StatusCode;
    use actix_web::web::Data;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use podcast_api::{PodcastImages, PodcastItem, PodcastMetadata};
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct UpstreamMock;

    #[async_trait]
    impl UpstreamCatalog for UpstreamMock {
        async fn search_podcasts(
            &self,
            page: u32,
            search: &str,
        ) -> Result<Vec<PodcastItem>, CatalogClientError> {
            match search {
                "broken" => Err(CatalogClientError::UnexpectedStatus(
                    reqwest::StatusCode::BAD_GATEWAY,
                )),
                "nothing" => Ok(vec![]),
                _ => Ok(vec![PodcastItem {
                    id: (page as u64).into(),
                    title: format!("{} p{}", search, page),
                    description: "Description".into(),
                    images: PodcastImages {
                        default: "d".into(),
                        featured: "f".into(),
                        thumbnail: "t".into(),
                        wide: "w".into(),
                    },
                    metadata: PodcastMetadata {
                        publisher_name: Some("Radio One".into()),
                        ..PodcastMetadata::default()
                    },
                }]),
            }
        }
    }

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(Data::new(Arc::new(UpstreamMock) as Arc<dyn UpstreamCatalog>))
                    .wrap(cors_headers())
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_search_is_wrapped_in_items() {
        let app = init_app!();

        let request = test::TestRequest::get()
            .uri("/api/podcasts?page=2&limit=10&search=jazz")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(
            Some("*"),
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|value| value.to_str().ok())
        );

        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            json!({
                "items": [{
                    "id": 2,
                    "title": "jazz p2",
                    "description": "Description",
                    "images": { "default": "d", "featured": "f", "thumbnail": "t", "wide": "w" },
                    "publisherName": "Radio One"
                }]
            }),
            body
        );
    }

    #[actix_web::test]
    async fn test_missing_params_default_to_first_page() {
        let app = init_app!();

        let request = test::TestRequest::get().uri("/api/podcasts").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(json!(" p1"), body["items"][0]["title"]);
    }

    #[actix_web::test]
    async fn test_empty_search_result() {
        let app = init_app!();

        let request = test::TestRequest::get()
            .uri("/api/podcasts?page=1&search=nothing")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(json!({ "items": [] }), body);
    }

    #[actix_web::test]
    async fn test_upstream_failure_is_internal_error() {
        let app = init_app!();

        let request = test::TestRequest::get()
            .uri("/api/podcasts?page=1&search=broken")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
        assert!(response
            .headers()
            .contains_key("access-control-allow-headers"));

        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            json!({ "error": "Error: unexpected upstream status: 502 Bad Gateway" }),
            body
        );
    }

    #[actix_web::test]
    async fn test_preflight_carries_cors_headers() {
        let app = init_app!();

        let request = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/podcasts")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::NO_CONTENT, response.status());
        assert_eq!(
            Some("Content-Type"),
            response
                .headers()
                .get("access-control-allow-headers")
                .and_then(|value| value.to_str().ok())
        );
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = init_app!();

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::OK, response.status());
    }
}
