//! The canonical record every source normalizes into, and the partial
//! fragment shape a single mapper can fill.

use serde::{Deserialize, Serialize};

/// The unified, validated output combining usage, SMS-charge and
/// billing-period data for one user. This is the only serialized shape that
/// matters for compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub user_id: String,
    pub phone_number: String,
    pub usage_data: UsageDataRecord,
    pub sms_charges: Vec<SmsChargeRecord>,
    pub billing_period: BillingPeriodRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDataRecord {
    pub total_mb: f64,
    pub roaming_mb: f64,
    pub country: String,
    pub network_type: String,
    pub provider_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsChargeRecord {
    pub message_id: String,
    pub timestamp: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingPeriodRecord {
    pub start: String,
    pub end: String,
}

/// An incomplete canonical record produced by a single mapper: every field
/// is an optional slot. Fragments combine via slot-wise override and are
/// finalized by the aggregation service, which reports any slot still empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_data: Option<PartialUsageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_charges: Option<Vec<SmsChargeRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<PartialBillingPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUsageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roaming_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialBillingPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl PartialRecord {
    /// Folds `later` over `self`: any slot the later fragment filled replaces
    /// the earlier value wholesale. The override is shallow; a later
    /// `usage_data` slot is not merged leaf-by-leaf with an earlier one.
    pub fn merge(self, later: PartialRecord) -> PartialRecord {
        PartialRecord {
            user_id: later.user_id.or(self.user_id),
            phone_number: later.phone_number.or(self.phone_number),
            usage_data: later.usage_data.or(self.usage_data),
            sms_charges: later.sms_charges.or(self.sms_charges),
            billing_period: later.billing_period.or(self.billing_period),
        }
    }
}
