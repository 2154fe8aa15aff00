//! Retrieval use cases. Each takes its collaborators by value (explicit
//! constructor injection), fetches and maps; the aggregated variant also
//! merges. Every failure below this layer is wrapped once with the user id.

use crate::core::{aggregation, charge_mapper, usage_mapper};
use crate::domain::ports::{ChargeClient, UsageClient};
use crate::domain::records::{CanonicalRecord, PartialRecord};
use crate::utils::error::{MvnoError, Result};

/// Fetches and normalizes usage data only. The returned fragment never
/// carries SMS charges.
pub struct UsageDataRetrieval<U: UsageClient> {
    usage_client: U,
}

impl<U: UsageClient> UsageDataRetrieval<U> {
    pub fn new(usage_client: U) -> Self {
        Self { usage_client }
    }

    pub async fn execute(&self, user_id: &str) -> Result<PartialRecord> {
        self.run(user_id)
            .await
            .map_err(|e| MvnoError::retrieval(user_id, e))
    }

    async fn run(&self, user_id: &str) -> Result<PartialRecord> {
        tracing::debug!("Fetching usage data for user {}", user_id);
        let payload = self.usage_client.fetch_usage(user_id).await?;
        Ok(usage_mapper::to_partial_record(&payload))
    }
}

/// Fetches and normalizes a single SMS charge. The returned fragment never
/// carries usage data or a billing period.
pub struct SmsChargeRetrieval<C: ChargeClient> {
    charge_client: C,
}

impl<C: ChargeClient> SmsChargeRetrieval<C> {
    pub fn new(charge_client: C) -> Self {
        Self { charge_client }
    }

    pub async fn execute(&self, user_id: &str) -> Result<PartialRecord> {
        self.run(user_id)
            .await
            .map_err(|e| MvnoError::retrieval(user_id, e))
    }

    async fn run(&self, user_id: &str) -> Result<PartialRecord> {
        tracing::debug!("Fetching SMS charge data for user {}", user_id);
        let payload = self.charge_client.fetch_sms_charge(user_id).await?;
        charge_mapper::to_partial_record(&payload)
    }
}

/// Fetches from both sources concurrently, maps each response independently
/// and merges the fragments into the validated canonical record.
/// All-or-nothing: if either upstream call fails, the whole retrieval fails.
pub struct AggregatedRetrieval<C: ChargeClient, U: UsageClient> {
    charge_client: C,
    usage_client: U,
}

impl<C: ChargeClient, U: UsageClient> AggregatedRetrieval<C, U> {
    pub fn new(charge_client: C, usage_client: U) -> Self {
        Self {
            charge_client,
            usage_client,
        }
    }

    pub async fn execute(&self, user_id: &str) -> Result<CanonicalRecord> {
        self.run(user_id)
            .await
            .map_err(|e| MvnoError::retrieval(user_id, e))
    }

    async fn run(&self, user_id: &str) -> Result<CanonicalRecord> {
        tracing::debug!("Fetching charge and usage data for user {}", user_id);

        // Both calls settle before either result is inspected; the sibling
        // call is never cancelled on failure.
        let (charge_response, usage_response) = tokio::join!(
            self.charge_client.fetch_sms_charge(user_id),
            self.usage_client.fetch_usage(user_id),
        );

        let charge_fragment = charge_mapper::to_partial_record(&charge_response?)?;
        let usage_fragment = usage_mapper::to_partial_record(&usage_response?);

        // Charge first, usage second: the usage source supplies the identity
        // values that win on overlap.
        aggregation::merge_partials(vec![charge_fragment, usage_fragment])
    }
}
