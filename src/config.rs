use crate::github::options::Options;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "announce.yaml";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub tag: String,
    /// `org/repo` slug
    pub repository: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub release_type: String,
    #[serde(default)]
    pub assets: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub no_mock: bool,
    #[serde(default)]
    pub update_if_release_exists: bool,
    /// path to a custom page template
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub release_notes_file: String,
    /// `key:value` entries
    #[serde(default)]
    pub substitutions: Vec<String>,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());

        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        Config::from_yaml(&config_string)
    }

    pub fn from_yaml(config_string: &str) -> Result<Config> {
        let config = serde_yaml::from_str::<Config>(config_string)?;

        Ok(config)
    }

    /// Builds validated release page options out of the config.
    pub fn into_options(self) -> Result<Options> {
        let mut options = Options::new()
            .with_tag(self.tag)
            .with_name(self.name)
            .with_release_type(self.release_type)
            .with_asset_files(self.assets)
            .with_draft(self.draft)
            .with_no_mock(self.no_mock)
            .with_update_if_release_exists(self.update_if_release_exists)
            .with_release_notes_file(self.release_notes_file);

        options.set_repository(&self.repository)?;
        options.read_template(&self.template)?;
        options
            .parse_substitutions(self.substitutions.as_slice())
            .context("Cannot parse template substitutions")?;

        options.validate()?;

        Ok(options)
    }
}
