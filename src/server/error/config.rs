use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the service reads.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `APP_URL` is not an absolute URL.
    #[error("Invalid URL in {var}: {source}")]
    InvalidUrl {
        var: String,
        #[source]
        source: url::ParseError,
    },
}
