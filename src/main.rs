use clap::Parser;
use mvno_normalizer::utils::{logger, validation::Validate};
use mvno_normalizer::{
    AggregatedRetrieval, CliConfig, MvnoRestClient, MvnoSoapClient, RetrievalMode,
    SmsChargeRetrieval, UsageDataRetrieval,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mvno-normalizer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&config).await {
        Ok(output) => {
            tracing::info!("✅ Retrieval completed for user {}", config.user_id);
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Retrieval failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: &CliConfig) -> mvno_normalizer::Result<String> {
    let output = match config.mode {
        RetrievalMode::Usage => {
            let client = MvnoRestClient::from_config(config)?;
            let use_case = UsageDataRetrieval::new(client);
            let fragment = use_case.execute(&config.user_id).await?;
            serde_json::to_string_pretty(&fragment)?
        }
        RetrievalMode::Sms => {
            let client = MvnoSoapClient::from_config(config)?;
            let use_case = SmsChargeRetrieval::new(client);
            let fragment = use_case.execute(&config.user_id).await?;
            serde_json::to_string_pretty(&fragment)?
        }
        RetrievalMode::Aggregated => {
            let soap_client = MvnoSoapClient::from_config(config)?;
            let rest_client = MvnoRestClient::from_config(config)?;
            let use_case = AggregatedRetrieval::new(soap_client, rest_client);
            let record = use_case.execute(&config.user_id).await?;
            serde_json::to_string_pretty(&record)?
        }
    };
    Ok(output)
}
