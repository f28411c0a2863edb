use crate::config::Config;
use crate::services::{CatalogClient, UpstreamCatalog};
use actix_rt::signal::unix;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use futures_lite::FutureExt;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod http;
mod services;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let mut terminate = unix::signal(unix::SignalKind::terminate())?;
    let mut interrupt = unix::signal(unix::SignalKind::interrupt())?;

    dotenv::dotenv().ok();
    env_logger::init();

    let config = Arc::from(Config::from_env());

    info!(version = VERSION, "Starting application...");

    let catalog: Arc<dyn UpstreamCatalog> = Arc::new(
        CatalogClient::create(
            &config.upstream_url,
            config.upstream_page_size,
            config.upstream_timeout(),
        )
        .expect("Unable to initialize upstream catalog client"),
    );

    let shutdown_timeout = config.shutdown_timeout;
    let bind_address = config.bind_address.clone();

    let server = HttpServer::new({
        move || {
            App::new()
                .app_data(Data::new(Arc::clone(&catalog)))
                .wrap(http::cors_headers())
                .configure(http::configure)
        }
    })
    .shutdown_timeout(shutdown_timeout)
    .bind(&bind_address)?
    .run();

    let server_handle = server.handle();

    actix_rt::spawn({
        async move {
            if let Err(error) = server.await {
                error!(?error, "Error on http server");
            }
        }
    });

    info!(%bind_address, upstream = %config.upstream_url, "Application started");

    interrupt.recv().or(terminate.recv()).await;

    info!("Received shutdown signal. Shutting down gracefully...");

    server_handle.stop(true).await;

    Ok(())
}
