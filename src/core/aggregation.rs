//! Combines partial fragments from independent sources into one complete
//! canonical record, and serializes programmatically built aggregates.

use crate::domain::model::NormalizedUserData;
use crate::domain::records::{
    BillingPeriodRecord, CanonicalRecord, PartialRecord, SmsChargeRecord, UsageDataRecord,
};
use crate::utils::error::{MvnoError, Result};
use chrono::SecondsFormat;

/// Folds the fragments left-to-right with later-wins slot override, then
/// validates completeness. Callers pass fragments in a deterministic order
/// (charge first, usage second), since overlapping identity slots are
/// silently overwritten by the later fragment.
pub fn merge_partials(fragments: Vec<PartialRecord>) -> Result<CanonicalRecord> {
    let merged = fragments
        .into_iter()
        .fold(PartialRecord::default(), PartialRecord::merge);
    finalize(merged)
}

/// Direct, non-merging serialization of a fully built aggregate. Timestamps
/// are rendered as ISO-8601 with millisecond precision.
pub fn to_canonical_record(data: &NormalizedUserData) -> CanonicalRecord {
    CanonicalRecord {
        user_id: data.user().user_id.clone(),
        phone_number: data.user().phone_number.clone(),
        usage_data: UsageDataRecord {
            total_mb: data.usage_data().total_mb,
            roaming_mb: data.usage_data().roaming_mb,
            country: data.usage_data().country.clone(),
            network_type: data.usage_data().network_type.clone(),
            provider_code: data.usage_data().provider_code.clone(),
        },
        sms_charges: data
            .sms_charges()
            .iter()
            .map(|charge| SmsChargeRecord {
                message_id: charge.message_id.clone(),
                timestamp: charge
                    .timestamp
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                amount: charge.amount,
                currency: charge.currency.clone(),
            })
            .collect(),
        billing_period: BillingPeriodRecord {
            start: data
                .billing_period()
                .start
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            end: data
                .billing_period()
                .end
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        },
    }
}

/// Converts the optional-slot builder into the complete record, or reports
/// the first slot that is still empty by its dotted path. A missing charge
/// list is not an error: it defaults to an empty sequence.
fn finalize(merged: PartialRecord) -> Result<CanonicalRecord> {
    let user_id = require_text("userId", merged.user_id)?;
    let phone_number = require_text("phoneNumber", merged.phone_number)?;
    let usage = merged
        .usage_data
        .ok_or_else(|| missing_field("usageData"))?;
    let period = merged
        .billing_period
        .ok_or_else(|| missing_field("billingPeriod"))?;

    let usage_data = UsageDataRecord {
        total_mb: usage
            .total_mb
            .ok_or_else(|| missing_field("usageData.totalMb"))?,
        roaming_mb: usage
            .roaming_mb
            .ok_or_else(|| missing_field("usageData.roamingMb"))?,
        country: require_text("usageData.country", usage.country)?,
        network_type: require_text("usageData.networkType", usage.network_type)?,
        provider_code: require_text("usageData.providerCode", usage.provider_code)?,
    };

    let billing_period = BillingPeriodRecord {
        start: require_text("billingPeriod.start", period.start)?,
        end: require_text("billingPeriod.end", period.end)?,
    };

    Ok(CanonicalRecord {
        user_id,
        phone_number,
        usage_data,
        sms_charges: merged.sms_charges.unwrap_or_default(),
        billing_period,
    })
}

fn missing_field(field: &str) -> MvnoError {
    MvnoError::IncompleteRecordError {
        field: field.to_string(),
    }
}

// Empty strings count as missing, mirroring the upstream contract.
fn require_text(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(missing_field(field)),
    }
}
