use async_trait::async_trait;
use std::time::Duration;

use crate::config::FeedConfig;
use crate::error::AppResult;
use crate::models::FeedDocument;

/// A source of earthquake feature collections. The production implementation
/// performs one HTTP GET against the configured feed URL; tests substitute
/// fixed fixtures.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_collection(&self) -> AppResult<FeedDocument>;
}

pub struct UsgsFeedSource {
    config: FeedConfig,
}

impl UsgsFeedSource {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl FeedSource for UsgsFeedSource {
    async fn fetch_collection(&self) -> AppResult<FeedDocument> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()?;

        let response = client
            .get(&self.config.url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let document: FeedDocument = serde_json::from_str(&body)?;
        Ok(document)
    }
}
