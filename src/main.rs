mod config;
mod git;
mod github;
mod logger;

use anyhow::{Context, Result};
use config::{Config, DEFAULT_CONFIG_FILE_NAME};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE_NAME.to_owned());

    log::info!("Starting");
    let config = Config::load(&config_path)
        .await
        .context("Cannot load config file")?;

    let options = config
        .into_options()
        .context("Cannot build the release page options")?;

    if options.no_mock() {
        log::info!("Running in production mode");
    } else {
        log::info!("Running in mock mode");
    }

    log::info!(
        "Release page for {}/{}@{} ready",
        options.owner(),
        options.repo(),
        options.tag()
    );
    if !options.name().is_empty() {
        log::debug!("release name: {}", options.name());
    }
    if !options.release_type().is_empty() {
        log::debug!("release type: {}", options.release_type());
    }
    log::debug!(
        "draft: {}, update if release exists: {}",
        options.draft(),
        options.update_if_release_exists()
    );
    log::info!(
        "{} assets, {} substitutions",
        options.asset_files().len(),
        options.substitutions().len()
    );
    if options.page_template().is_empty() {
        log::info!("Using default page template");
    }
    if !options.release_notes_file().is_empty() {
        log::info!("Release notes from {}", options.release_notes_file());
    }

    Ok(())
}
