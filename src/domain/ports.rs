use crate::domain::protocol::{ChargeProtocolPayload, UsageProtocolPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Upstream SOAP charging API. Rejection reasons are opaque to the core
/// beyond the error message; retries, if any, live behind this trait.
#[async_trait]
pub trait ChargeClient: Send + Sync {
    async fn fetch_sms_charge(&self, user_id: &str) -> Result<ChargeProtocolPayload>;
}

/// Upstream REST usage API. Same opaque-rejection contract.
#[async_trait]
pub trait UsageClient: Send + Sync {
    async fn fetch_usage(&self, user_id: &str) -> Result<UsageProtocolPayload>;
}

pub trait ConfigProvider: Send + Sync {
    fn soap_api_url(&self) -> &str;
    fn rest_api_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
