use crate::domain::ports::PageFetcher;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed fetcher. The client is owned here and handed to the
/// pipeline explicitly rather than living in a process-wide singleton.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} answered {}", url, status);
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        tracing::debug!("GET {} returned {} bytes", url, body.len());
        Ok(body)
    }
}
