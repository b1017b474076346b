use crate::model::{ApiStatus, FetchError, Page};
use serde_json::Value;

#[async_trait::async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn fetch_page(&self, page: Page) -> Result<Value, FetchError>;
    async fn health(&self) -> Result<ApiStatus, FetchError>;
    async fn request_refresh(&self) -> Result<(), FetchError>;
}
