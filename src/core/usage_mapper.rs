//! Maps the REST usage payload into domain values and into a partial
//! canonical fragment. Pure transforms.

use crate::domain::model::{BillingPeriod, UsageData, User};
use crate::domain::protocol::UsageProtocolPayload;
use crate::domain::records::{PartialBillingPeriod, PartialRecord, PartialUsageData};
use crate::utils::error::Result;

pub fn to_usage_data(payload: &UsageProtocolPayload) -> UsageData {
    UsageData::new(
        payload.usage.data.total_mb,
        payload.usage.data.roaming_mb,
        &payload.usage.data.country,
        &payload.network.network_type,
        &payload.network.provider_code,
    )
}

pub fn extract_billing_period(payload: &UsageProtocolPayload) -> Result<BillingPeriod> {
    BillingPeriod::from_iso_strings(&payload.usage.period.start, &payload.usage.period.end)
}

pub fn extract_user(payload: &UsageProtocolPayload) -> User {
    User::new(&payload.user_id, &payload.msisdn)
}

/// Produces the usage-side fragment: identity, usage data and billing
/// period. Never fills `sms_charges`; that slot belongs to the charge
/// source. Period boundaries pass through as the raw wire strings.
pub fn to_partial_record(payload: &UsageProtocolPayload) -> PartialRecord {
    PartialRecord {
        user_id: Some(payload.user_id.clone()),
        phone_number: Some(payload.msisdn.clone()),
        usage_data: Some(PartialUsageData {
            total_mb: Some(payload.usage.data.total_mb),
            roaming_mb: Some(payload.usage.data.roaming_mb),
            country: Some(payload.usage.data.country.clone()),
            network_type: Some(payload.network.network_type.clone()),
            provider_code: Some(payload.network.provider_code.clone()),
        }),
        billing_period: Some(PartialBillingPeriod {
            start: Some(payload.usage.period.start.clone()),
            end: Some(payload.usage.period.end.clone()),
        }),
        ..PartialRecord::default()
    }
}
