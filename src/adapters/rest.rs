use crate::domain::ports::{ConfigProvider, UsageClient};
use crate::domain::protocol::UsageProtocolPayload;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// REST client for the MVNO provider's usage API.
pub struct MvnoRestClient {
    base_url: String,
    client: Client,
}

impl MvnoRestClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.rest_api_url(), config.request_timeout())
    }

    fn usage_url(&self, user_id: &str) -> String {
        format!(
            "{}/users/{}/usage",
            self.base_url.trim_end_matches('/'),
            user_id
        )
    }
}

#[async_trait]
impl UsageClient for MvnoRestClient {
    async fn fetch_usage(&self, user_id: &str) -> Result<UsageProtocolPayload> {
        let url = self.usage_url(user_id);
        tracing::debug!("📡 REST request to: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        tracing::debug!("📡 REST response status: {}", response.status());

        let payload = response.json::<UsageProtocolPayload>().await?;
        Ok(payload)
    }
}
