//! Portal configuration

use serde::Deserialize;

/// Portal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database URL for the claims table and change feed
    pub database_url: String,
    /// Base URL of the hosted backend project
    pub provider_url: String,
    /// Project API key sent with auth and storage requests
    pub provider_api_key: String,
    /// Provider JWT secret; enables local token expiry decoding when set
    pub provider_jwt_secret: Option<String>,
    /// Bucket holding claim documents
    pub storage_bucket: String,
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/medclaim".to_string(),
            provider_url: "http://localhost:54321".to_string(),
            provider_api_key: String::new(),
            provider_jwt_secret: None,
            storage_bucket: "claim-documents".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("MEDCLAIM"))
            .build()?
            .try_deserialize()
    }
}
