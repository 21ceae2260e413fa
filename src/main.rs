use std::sync::Arc;

use anyhow::{Context, Result};

use travelmax::config::TravelMaxConfig;
use travelmax::llm::GroqClient;
use travelmax::planner::ItineraryPlanner;
use travelmax::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TravelMaxConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    // A missing credential is fatal before any request is accepted.
    let client = match GroqClient::from_config(&config.llm) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    tracing::info!(model = %config.llm.model, "TravelMAX starting");

    let planner = Arc::new(ItineraryPlanner::new(Arc::new(client)));
    web::run(planner, config.server.port).await
}
