//! Wire shapes of the two upstream MVNO provider APIs. Key-to-field
//! translation happens here, at the serde boundary; nothing downstream
//! indexes payloads by string key.

use serde::Deserialize;

/// SOAP charging response envelope. The provider qualifies every tag, so the
/// renames carry the full prefixed names. One envelope carries exactly one
/// charge event.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeProtocolPayload {
    #[serde(rename = "soapenv:Body")]
    pub body: ChargeBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChargeBody {
    #[serde(rename = "sms:ChargeSMS")]
    pub charge_sms: ChargeSmsEvent,
}

/// All six leaves are required and arrive as strings; the charge amount is
/// textual and parsed later by the mapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeSmsEvent {
    #[serde(rename = "sms:UserID")]
    pub user_id: String,
    #[serde(rename = "sms:PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "sms:MessageID")]
    pub message_id: String,
    #[serde(rename = "sms:Timestamp")]
    pub timestamp: String,
    #[serde(rename = "sms:ChargeAmount")]
    pub charge_amount: String,
    #[serde(rename = "sms:Currency")]
    pub currency: String,
}

/// REST usage response: identity at the top level, usage and network split
/// into nested groups. Numeric fields arrive as numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageProtocolPayload {
    pub user_id: String,
    pub msisdn: String,
    pub usage: UsageSection,
    pub network: NetworkSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageSection {
    pub data: UsageDataSection,
    pub period: UsagePeriodSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageDataSection {
    pub total_mb: f64,
    pub roaming_mb: f64,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsagePeriodSection {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSection {
    #[serde(rename = "type")]
    pub network_type: String,
    pub provider_code: String,
}
