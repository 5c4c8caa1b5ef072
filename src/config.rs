//! Configuration management for the election registry
//!
//! Loads registry settings from environment variables with validation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default minimum voting age in years
pub const DEFAULT_MIN_VOTING_AGE: u64 = 18;

/// Election-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectionConfig {
    /// Minimum voting age in years (default: 18)
    pub min_voting_age: u64,
}

impl ElectionConfig {
    /// Load election configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let min_voting_age = std::env::var("PANCHAYAT_MIN_VOTING_AGE")
            .unwrap_or_else(|_| DEFAULT_MIN_VOTING_AGE.to_string())
            .parse()
            .map_err(|_| Error::internal("Invalid PANCHAYAT_MIN_VOTING_AGE"))?;

        let config = Self { min_voting_age };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration for testing
    pub fn for_testing() -> Self {
        Self {
            min_voting_age: DEFAULT_MIN_VOTING_AGE,
        }
    }

    /// Validate configured values against sane ranges
    fn validate(&self) -> Result<()> {
        if self.min_voting_age == 0 || self.min_voting_age > 150 {
            return Err(Error::validation("min_voting_age"));
        }
        Ok(())
    }
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            min_voting_age: DEFAULT_MIN_VOTING_AGE,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub election: ElectionConfig,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self> {
        let election = ElectionConfig::from_env()?;

        let logging = LoggingConfig {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
        };

        Ok(Self { election, logging })
    }

    /// Create configuration for testing
    pub fn for_testing() -> Self {
        let election = ElectionConfig::for_testing();

        let logging = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };

        Self { election, logging }
    }
}
