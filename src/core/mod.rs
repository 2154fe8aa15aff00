pub mod aggregation;
pub mod charge_mapper;
pub mod retrieval;
pub mod usage_mapper;

pub use crate::domain::model::{BillingPeriod, NormalizedUserData, SmsCharge, UsageData, User};
pub use crate::domain::ports::{ChargeClient, ConfigProvider, UsageClient};
pub use crate::domain::records::{CanonicalRecord, PartialRecord};
pub use crate::utils::error::Result;
