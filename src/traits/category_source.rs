use async_trait::async_trait;
use crate::errors::MarketplaceResult;

/// Where the remote category list comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategorySource: Send + Sync {
    async fn fetch_categories(&self, url: &str) -> MarketplaceResult<Vec<String>>;
}
