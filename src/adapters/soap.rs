use crate::domain::ports::{ChargeClient, ConfigProvider};
use crate::domain::protocol::ChargeProtocolPayload;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const SMS_NAMESPACE: &str = "http://provider.com/sms";

/// SOAP client for the MVNO provider's SMS charging API.
pub struct MvnoSoapClient {
    endpoint: String,
    client: Client,
}

impl MvnoSoapClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.soap_api_url(), config.request_timeout())
    }

    fn charge_request_envelope(user_id: &str) -> String {
        format!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:sms="{}">
  <soapenv:Header/>
  <soapenv:Body>
    <sms:GetSmsCharge>
      <sms:UserID>{}</sms:UserID>
    </sms:GetSmsCharge>
  </soapenv:Body>
</soapenv:Envelope>"#,
            SMS_NAMESPACE,
            quick_xml::escape::escape(user_id)
        )
    }
}

#[async_trait]
impl ChargeClient for MvnoSoapClient {
    async fn fetch_sms_charge(&self, user_id: &str) -> Result<ChargeProtocolPayload> {
        tracing::debug!("📡 SOAP request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}/ChargeSMS\"", SMS_NAMESPACE))
            .body(Self::charge_request_envelope(user_id))
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("📡 SOAP response status: {}", response.status());

        let body = response.text().await?;
        let payload: ChargeProtocolPayload = quick_xml::de::from_str(&body)?;
        Ok(payload)
    }
}
