// JSON client for the analytics backend.
use crate::api::traits::AnalyticsApi;
use crate::model::{ApiStatus, FetchError, Page};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AnalyticsApi for ApiClient {
    async fn fetch_page(&self, page: Page) -> Result<Value, FetchError> {
        self.get_json(page.endpoint()).await
    }

    async fn health(&self) -> Result<ApiStatus, FetchError> {
        match self.get_json("/health").await {
            Ok(_) => Ok(ApiStatus::Connected),
            Err(_) => Ok(ApiStatus::Disconnected),
        }
    }

    /// Asks the backend to recompute its analytics. The refreshed data
    /// arrives through the next page fetches.
    async fn request_refresh(&self) -> Result<(), FetchError> {
        let url = format!("{}/api/refresh", self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(())
    }
}
