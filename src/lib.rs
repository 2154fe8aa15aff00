pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{MvnoRestClient, MvnoSoapClient};
pub use config::{CliConfig, RetrievalMode};
pub use crate::core::retrieval::{AggregatedRetrieval, SmsChargeRetrieval, UsageDataRetrieval};
pub use utils::error::{MvnoError, Result};
