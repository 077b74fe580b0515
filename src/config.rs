//! Configuration for the credential store
//!
//! Loaded once at startup from an optional `config.toml` with environment
//! overrides (prefix `CREDSTORE`). All values are fixed for the lifetime of
//! a store instance; in particular the filter sizes cannot change after
//! construction.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the flat-file user database
    pub db_path: String,

    /// Bit-array size of the registered-username filter
    pub username_filter_bits: usize,

    /// Bit-array size of the weak-password filter
    pub weak_password_filter_bits: usize,

    /// Hash functions per filter probe (1 to 3)
    pub hash_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: "users.db".to_string(),
            username_filter_bits: 10_000,
            weak_password_filter_bits: 5_000,
            hash_count: 3,
        }
    }
}

impl StoreConfig {
    /// Load configuration from `config.toml` (if present) with environment
    /// overrides. Missing file and missing keys fall back to the defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CREDSTORE"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.db_path.is_empty() {
            return Err(config::ConfigError::Message(
                "db_path cannot be empty".into(),
            ));
        }

        if self.username_filter_bits == 0 || self.weak_password_filter_bits == 0 {
            return Err(config::ConfigError::Message(
                "filter sizes must be greater than 0".into(),
            ));
        }

        if !(1..=3).contains(&self.hash_count) {
            return Err(config::ConfigError::Message(
                "hash_count must be between 1 and 3".into(),
            ));
        }

        Ok(())
    }
}
