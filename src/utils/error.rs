use thiserror::Error;

/// Failure to retrieve a page over the network.
///
/// Non-2xx responses get their own variant so log output can tell a 404
/// apart from a connect timeout, but callers treat both as a failed fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("overview page fetch failed: {0}")]
    Overview(#[source] FetchError),

    #[error("link pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
