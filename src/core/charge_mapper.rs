//! Maps the tag-qualified SMS charging payload into domain values and into a
//! partial canonical fragment. Pure transforms, one charge event per call.

use crate::domain::model::{SmsCharge, User};
use crate::domain::protocol::ChargeProtocolPayload;
use crate::domain::records::{PartialRecord, SmsChargeRecord};
use crate::utils::error::{MvnoError, Result};

pub fn to_sms_charge(payload: &ChargeProtocolPayload) -> Result<SmsCharge> {
    let event = &payload.body.charge_sms;
    SmsCharge::from_raw(
        &event.message_id,
        &event.timestamp,
        parse_amount(&event.charge_amount)?,
        &event.currency,
    )
}

pub fn extract_user(payload: &ChargeProtocolPayload) -> User {
    let event = &payload.body.charge_sms;
    User::new(&event.user_id, &event.phone_number)
}

/// Produces the charge-side fragment: identity plus a single-element charge
/// list. Never fills `usage_data` or `billing_period`; those belong to the
/// usage source. The timestamp passes through as the raw wire string.
pub fn to_partial_record(payload: &ChargeProtocolPayload) -> Result<PartialRecord> {
    let event = &payload.body.charge_sms;

    let charge = SmsChargeRecord {
        message_id: event.message_id.clone(),
        timestamp: event.timestamp.clone(),
        amount: parse_amount(&event.charge_amount)?,
        currency: event.currency.clone(),
    };

    Ok(PartialRecord {
        user_id: Some(event.user_id.clone()),
        phone_number: Some(event.phone_number.clone()),
        sms_charges: Some(vec![charge]),
        ..PartialRecord::default()
    })
}

// Standard float parsing: "NaN" is accepted, trailing garbage is not.
fn parse_amount(raw: &str) -> Result<f64> {
    raw.parse::<f64>().map_err(|e| MvnoError::ParseError {
        field: "sms:ChargeAmount".to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
