use crate::utils::error::{MvnoError, Result};
use chrono::{DateTime, Utc};

/// A mobile user in the telecom system. Identity is the user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub phone_number: String,
}

impl User {
    pub fn new(user_id: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// A billing window. Both boundaries must parse; no ordering between start
/// and end is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BillingPeriod {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn from_iso_strings(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_timestamp("billing_period.start", start)?,
            end: parse_timestamp("billing_period.end", end)?,
        })
    }
}

/// A single SMS charge event. Identity is the message id within a user's
/// charge list. Amount and currency are carried as-is, unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct SmsCharge {
    pub message_id: String,
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    pub currency: String,
}

impl SmsCharge {
    pub fn from_raw(
        message_id: impl Into<String>,
        timestamp: &str,
        amount: f64,
        currency: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            message_id: message_id.into(),
            timestamp: parse_timestamp("timestamp", timestamp)?,
            amount,
            currency: currency.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsageData {
    pub total_mb: f64,
    pub roaming_mb: f64,
    pub country: String,
    pub network_type: String,
    pub provider_code: String,
}

impl UsageData {
    pub fn new(
        total_mb: f64,
        roaming_mb: f64,
        country: impl Into<String>,
        network_type: impl Into<String>,
        provider_code: impl Into<String>,
    ) -> Self {
        Self {
            total_mb,
            roaming_mb,
            country: country.into(),
            network_type: network_type.into(),
            provider_code: provider_code.into(),
        }
    }
}

/// Aggregate root owning one user's normalized telecom data. Charges keep
/// insertion order; everything else is fixed at construction.
#[derive(Debug, Clone)]
pub struct NormalizedUserData {
    user: User,
    usage_data: UsageData,
    billing_period: BillingPeriod,
    sms_charges: Vec<SmsCharge>,
}

impl NormalizedUserData {
    pub fn new(user: User, usage_data: UsageData, billing_period: BillingPeriod) -> Self {
        Self {
            user,
            usage_data,
            billing_period,
            sms_charges: Vec::new(),
        }
    }

    pub fn add_sms_charge(&mut self, charge: SmsCharge) {
        self.sms_charges.push(charge);
    }

    pub fn add_sms_charges(&mut self, charges: impl IntoIterator<Item = SmsCharge>) {
        self.sms_charges.extend(charges);
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn usage_data(&self) -> &UsageData {
        &self.usage_data
    }

    pub fn billing_period(&self) -> &BillingPeriod {
        &self.billing_period
    }

    pub fn sms_charges(&self) -> &[SmsCharge] {
        &self.sms_charges
    }
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| MvnoError::ParseError {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
