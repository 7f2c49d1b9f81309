use crate::error::FetchError;

/// Where listing pages come from
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw markup of one listing page
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
