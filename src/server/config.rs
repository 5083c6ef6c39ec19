use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,

    /// Public base URL of the site, used for absolute links in responses.
    pub app_url: Url,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = std::env::var("APP_URL")
            .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: Url::parse(&app_url).map_err(|e| ConfigError::InvalidUrl {
                var: "APP_URL".to_string(),
                source: e,
            })?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
