use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RetrievalMode {
    /// Usage data only (REST source)
    Usage,
    /// SMS charge only (SOAP source)
    Sms,
    /// Both sources, merged into the canonical record
    Aggregated,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mvno-normalizer")]
#[command(about = "Normalizes MVNO usage and SMS charge data into one canonical record")]
pub struct CliConfig {
    /// User id to retrieve data for
    #[arg(long)]
    pub user_id: String,

    #[arg(long, value_enum, default_value = "aggregated")]
    pub mode: RetrievalMode,

    #[arg(
        long,
        env = "SOAP_API_URL",
        default_value = "https://mvno-provider.example.com/soap"
    )]
    pub soap_api_url: String,

    #[arg(
        long,
        env = "REST_API_URL",
        default_value = "https://mvno-provider.example.com/api/v1"
    )]
    pub rest_api_url: String,

    #[arg(long, env = "REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn soap_api_url(&self) -> &str {
        &self.soap_api_url
    }

    fn rest_api_url(&self) -> &str {
        &self.rest_api_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("soap_api_url", &self.soap_api_url)?;
        validate_url("rest_api_url", &self.rest_api_url)?;
        validate_non_empty_string("user_id", &self.user_id)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}
