//! Configuration model loaded from external sources.

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::catalog::retry::RetryPolicy;
use crate::models::browse::BrowseSettings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub address: String,
    pub port: u16,
    #[validate(length(min = 1))]
    pub templates_dir: String,
    #[validate(length(min = 1))]
    pub assets_dir: String,
    #[validate(url)]
    pub catalog_url: String,
    #[validate(length(min = 1))]
    pub catalog_set: String,
    #[validate(range(min = 1))]
    pub default_page_size: usize,
    #[validate(length(min = 1))]
    pub page_size_options: Vec<usize>,
    #[validate(range(min = 1))]
    pub max_visible_pages: usize,
    #[validate(range(min = 1))]
    pub estimated_total_items: usize,
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
    /// Retries after the first attempt.
    #[validate(range(max = 10))]
    pub retry_attempts: u32,
}

impl ServerConfig {
    /// Reads `path` and applies `APP_*` environment overrides, then validates.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix("APP")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("page_size_options"),
            )
            .build()?;

        let server_config: ServerConfig = settings.try_deserialize()?;
        server_config.validate()?;
        Ok(server_config)
    }

    pub fn browse_settings(&self) -> BrowseSettings {
        let mut page_size_options: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .filter(|&size| size > 0)
            .collect();
        page_size_options.sort_unstable();
        page_size_options.dedup();

        BrowseSettings {
            default_set: self.catalog_set.clone(),
            default_page_size: self.default_page_size,
            page_size_options,
            max_visible_pages: self.max_visible_pages,
            estimated_total_items: self.estimated_total_items,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::with_retries(self.retry_attempts)
    }
}
