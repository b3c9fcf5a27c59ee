use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;

/// Retrieves the raw text body for an absolute URL. Exactly one outbound
/// request per call; no retries at this layer.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn overview_url(&self) -> &str;
    fn base_url(&self) -> &str;
    fn detail_prefix(&self) -> &str;
    /// `None` means "process all discovered links".
    fn max_items(&self) -> Option<usize>;
    fn concurrent_requests(&self) -> usize;
    /// Relative storage path for the raw overview dump, if one is wanted.
    fn dump_overview_path(&self) -> Option<&str>;
}
