use crate::config::{AppConfig, STATIC_CONFIG_PATH};
use crate::crawler::{CrawlParams, Crawler, ScraperType};
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use crate::templates::Templates;
use anyhow::Context;
use astra::Server;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod browser;
mod config;
mod crawler;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

/// Render-endpoint worker bound: 5 base connections plus 10 overflow.
const SERVER_WORKERS: usize = 5 + 10;

/// Scrape real estate listings and serve them as HTML.
#[derive(Parser, Debug)]
#[command(name = "estate_scraper", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl listing pages and store every ad found
    Scrape {
        /// Choose the spider type
        #[arg(long, value_enum)]
        spider: ScraperType,

        /// Base URL of the listing site
        #[arg(long)]
        base_url: String,

        /// Path of the listing search on that site
        #[arg(long)]
        path: String,

        /// Number of pages to scrape
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Serve the stored listings over HTTP
    Serve,

    /// Create the listing table if it doesn't exist
    Migrate,
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_env(Path::new(STATIC_CONFIG_PATH))
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Scrape {
            spider,
            base_url,
            path,
            pages,
        } => scrape(&config, spider, CrawlParams { base_url, path, pages }),
        Command::Serve => serve(config),
        Command::Migrate => {
            init_db(&Database::new(config.store.path.clone()))?;
            Ok(())
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("estate_scraper=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn scrape(config: &AppConfig, spider: ScraperType, params: CrawlParams) -> anyhow::Result<()> {
    if params.pages == 0 {
        tracing::info!("Page count is 0, nothing to crawl");
        return Ok(());
    }

    let mut crawler = Crawler::connect(spider.spider(), &config.webdriver, &config.store)
        .context("Failed to start crawl run")?;
    crawler.run(&params);

    Ok(())
}

fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState {
        db: Database::new(config.store.path.clone()),
        templates: Templates::new(&config.static_config.templates),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.app_port));
    tracing::info!(%addr, "Starting server");

    let server = Server::bind(addr).max_workers(SERVER_WORKERS);

    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => responses::html_error_response(err),
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly");
    Ok(())
}
