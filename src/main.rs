mod catalog_client;
mod config;
mod domain;
mod nav;
mod ui;

use std::path::Path;

use anyhow::Context;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder, prelude::*};

use catalog_client::CatalogClient;
use config::Config;
use nav::NavState;
use ui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (logs). Respect RUST_LOG if set, default to info for
    // our crate and warn for deps. Logs go to stderr so the alternate screen
    // stays clean.
    let default_filter = format!("{}=info,reqwest=warn,h2=warn", env!("CARGO_PKG_NAME"));
    let env_filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish()
        .with(ErrorLayer::default())
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting bestshelf");

    // Load environment variables from .env files
    if Path::new(".env.local").exists() {
        dotenvy::from_filename(".env.local")?;
    } else if Path::new(".env").exists() {
        dotenvy::from_filename(".env")?;
    }
    let config = Config::load();
    if let Err(e) = config.validate() {
        return Err(anyhow::anyhow!(e));
    }

    // An optional query-string argument acts as a direct link, e.g.
    //   bestshelf '?list=hardcover-nonfiction&offset=20'
    let initial = std::env::args()
        .nth(1)
        .map(|q| NavState::parse(&q))
        .unwrap_or_default();

    let client = CatalogClient::new(&config.api_base_url)?;
    tracing::info!(
        api_base = %config.api_base_url,
        list = %initial.list,
        offset = initial.offset,
        "fetching initial catalog state"
    );

    // First page and genre list together, mirroring the first render.
    let (first_page, genres) = tokio::try_join!(
        client.fetch_books(&initial.list, initial.offset),
        client.fetch_genres()
    )
    .context("initial catalog fetch failed")?;

    App::new(initial, first_page, genres).run(client).await
}
