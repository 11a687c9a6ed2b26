//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `GNOUBY_DATA_DIR` - Directory for durable storage (default: `.gnouby`)
//! - `GNOUBY_PAGE_SIZE` - Orders per history page (default: 5)
//! - `GNOUBY_ORDER_DELAY_MS` - Artificial delay between order submission and
//!   confirmation, applied by the presentation layer (default: 2000)
//! - `GNOUBY_CATALOG` - Path to a JSON catalog file (default: built-in seed)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".gnouby";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_ORDER_DELAY_MS: u64 = 2000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the durable store's JSON documents.
    pub data_dir: PathBuf,
    /// Fixed page size for order-history pagination.
    pub page_size: usize,
    /// Artificial order-processing delay shown by the presentation layer.
    pub order_processing_delay: Duration,
    /// Optional path to an external catalog JSON file.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("GNOUBY_DATA_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let page_size = parse_var("GNOUBY_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "GNOUBY_PAGE_SIZE".to_owned(),
                "page size must be at least 1".to_owned(),
            ));
        }

        let delay_ms = parse_var("GNOUBY_ORDER_DELAY_MS", DEFAULT_ORDER_DELAY_MS)?;

        let catalog_path = std::env::var("GNOUBY_CATALOG").ok().map(PathBuf::from);

        Ok(Self {
            data_dir,
            page_size,
            order_processing_delay: Duration::from_millis(delay_ms),
            catalog_path,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page_size: DEFAULT_PAGE_SIZE,
            order_processing_delay: Duration::from_millis(DEFAULT_ORDER_DELAY_MS),
            catalog_path: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_owned(), format!("cannot parse {raw:?}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".gnouby"));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.order_processing_delay, Duration::from_millis(2000));
        assert!(config.catalog_path.is_none());
    }
}
