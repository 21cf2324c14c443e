use anyhow::Result;
use clap::Parser;
use log::info;
use std::sync::Arc;

use mantle_context::api::FeedClient;
use mantle_context::cli::Cli;
use mantle_context::config::Config;
use mantle_context::server::Server;
use mantle_context::tools::ToolRegistry;
use mantle_context::{logging, metrics};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration from {:?}: {}", path, e);
                return Err(anyhow::anyhow!("configuration loading failed: {}", e));
            }
        },
        None => Config::default(),
    };

    logging::init(cli.debug, config.server.log_file.as_deref())?;
    metrics::init()?;
    info!("configuration loaded, target chain {}", config.network.chain_name);

    let registry = ToolRegistry::from_config(&config);
    if cli.list_tools {
        for def in registry.definitions() {
            println!("{}", def.name);
        }
        return Ok(());
    }

    let feeds = FeedClient::new(config.network.clone(), config.upstream.clone())?;
    let server = Server::new(config.server.clone(), registry, Arc::new(feeds));
    server.run().await?;
    Ok(())
}
