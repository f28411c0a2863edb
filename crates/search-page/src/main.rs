use podcast_api::{PodcastApiClient, PodcastCatalog};
use search_page::{apply_command, parse_command, ConsoleError, SearchPageConfig, SearchPageController};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

#[actix_rt::main]
async fn main() -> Result<(), ConsoleError> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match SearchPageConfig::from_env() {
        Ok(config) => config,
        Err(error) => panic!("Invalid environment configuration: {:#?}", error),
    };

    let client = PodcastApiClient::create(&config.api_base_url, config.request_timeout())
        .expect("Unable to initialize podcast API client");

    info!(endpoint = client.endpoint(), "Starting search console...");

    let catalog: Arc<dyn PodcastCatalog> = Arc::new(client);
    let controller = SearchPageController::new(catalog, &config);
    let mut updates = controller.subscribe();

    actix_rt::spawn(async move {
        while updates.changed().await.is_ok() {
            let rendered = updates.borrow_and_update().view().to_string();
            println!("{}", rendered);
        }
    });

    controller.mount();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(command) => {
                if !apply_command(&controller, command) {
                    break;
                }
            }
            Err(error) => {
                warn!(?error, "Unable to parse command");
                eprintln!("{}", error);
            }
        }
    }

    if let Err(error) = std::io::Write::flush(&mut std::io::stdout()) {
        error!(?error, "Unable to flush stdout");
    }

    info!("Search console stopped");

    Ok(())
}
