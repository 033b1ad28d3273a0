//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VILLA_DATA_DIR` - Directory for the file-backed store (default: `./data`)
//! - `VILLA_SEED_ON_EMPTY` - Seed demo fixtures when the catalog is empty
//!   (`true`/`false`, default: true)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront data-layer configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory backing the local store.
    pub data_dir: PathBuf,
    /// Whether an empty catalog is seeded with demo fixtures on open.
    pub seed_on_empty: bool,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `VILLA_SEED_ON_EMPTY` is
    /// set to something other than `true`/`false`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var("VILLA_DATA_DIR")
            .map_or_else(|_| PathBuf::from("./data"), PathBuf::from);

        let seed_on_empty = match std::env::var("VILLA_SEED_ON_EMPTY") {
            Ok(raw) => match raw.to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                other => {
                    return Err(ConfigError::InvalidEnvVar(
                        "VILLA_SEED_ON_EMPTY".to_owned(),
                        format!("expected true or false, got {other}"),
                    ));
                }
            },
            Err(_) => true,
        };

        Ok(Self {
            data_dir,
            seed_on_empty,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            seed_on_empty: true,
        }
    }
}
