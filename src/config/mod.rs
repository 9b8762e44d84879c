use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_request_size")]
    pub max_request_size: usize,
}

/// Recipe catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Load the built-in fallback recipes at startup
    #[serde(default = "default_seed_fallback_recipes")]
    pub seed_fallback_recipes: bool,
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

// Web defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_request_size() -> usize {
    DEFAULT_MAX_REQUEST_SIZE
}

// Catalog defaults
fn default_seed_fallback_recipes() -> bool {
    DEFAULT_SEED_FALLBACK_RECIPES
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    DEFAULT_MAX_PAGE_SIZE
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_request_size: default_max_request_size(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_fallback_recipes: default_seed_fallback_recipes(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Config {
    /// Load from `path`, writing a default config file if none exists
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        let config = if std::path::Path::new(config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            toml::from_str::<Self>(&contents)?
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            default_config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.web.max_request_size == 0 {
            return Err(AppError::configuration("web.max_request_size must be > 0"));
        }
        if self.catalog.default_page_size == 0 {
            return Err(AppError::configuration(
                "catalog.default_page_size must be > 0",
            ));
        }
        if self.catalog.default_page_size > self.catalog.max_page_size {
            return Err(AppError::configuration(format!(
                "catalog.default_page_size ({}) exceeds catalog.max_page_size ({})",
                self.catalog.default_page_size, self.catalog.max_page_size
            )));
        }
        Ok(())
    }
}
