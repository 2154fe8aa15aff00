use anyhow::Result;
use httpmock::prelude::*;
use mvno_normalizer::{
    AggregatedRetrieval, MvnoError, MvnoRestClient, MvnoSoapClient, SmsChargeRetrieval,
    UsageDataRetrieval,
};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn soap_response(user_id: &str) -> String {
    format!(
        r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:sms="http://provider.com/sms">
  <soapenv:Header/>
  <soapenv:Body>
    <sms:ChargeSMS>
      <sms:UserID>{user_id}</sms:UserID>
      <sms:PhoneNumber>+46701234567</sms:PhoneNumber>
      <sms:MessageID>msg789</sms:MessageID>
      <sms:Timestamp>2025-04-01T12:30:00Z</sms:Timestamp>
      <sms:ChargeAmount>0.05</sms:ChargeAmount>
      <sms:Currency>EUR</sms:Currency>
    </sms:ChargeSMS>
  </soapenv:Body>
</soapenv:Envelope>"#
    )
}

fn usage_response(user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "msisdn": "+46701234567",
        "usage": {
            "data": {
                "total_mb": 845.23,
                "roaming_mb": 210.50,
                "country": "SE"
            },
            "period": {
                "start": "2025-04-01T00:00:00Z",
                "end": "2025-04-30T23:59:59Z"
            }
        },
        "network": {
            "type": "4G",
            "provider_code": "SE01"
        }
    })
}

#[tokio::test]
async fn test_aggregated_retrieval_end_to_end() -> Result<()> {
    let server = MockServer::start();

    let soap_mock = server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(soap_response("user123"));
    });
    let rest_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/user123/usage");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usage_response("user123"));
    });

    let soap_client = MvnoSoapClient::new(server.url("/soap"), TIMEOUT)?;
    let rest_client = MvnoRestClient::new(server.url("/api/v1"), TIMEOUT)?;
    let use_case = AggregatedRetrieval::new(soap_client, rest_client);

    let record = use_case.execute("user123").await?;

    soap_mock.assert();
    rest_mock.assert();

    assert_eq!(record.user_id, "user123");
    assert_eq!(record.phone_number, "+46701234567");
    assert_eq!(record.usage_data.total_mb, 845.23);
    assert_eq!(record.usage_data.provider_code, "SE01");
    assert_eq!(record.billing_period.start, "2025-04-01T00:00:00Z");
    assert_eq!(record.sms_charges.len(), 1);
    assert_eq!(record.sms_charges[0].message_id, "msg789");
    assert_eq!(record.sms_charges[0].amount, 0.05);

    Ok(())
}

#[tokio::test]
async fn test_aggregated_fails_when_usage_source_rejects() -> Result<()> {
    let server = MockServer::start();

    // The charge call would succeed; the whole retrieval must still fail.
    let soap_mock = server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(soap_response("user123"));
    });
    let rest_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/user123/usage");
        then.status(500);
    });

    let soap_client = MvnoSoapClient::new(server.url("/soap"), TIMEOUT)?;
    let rest_client = MvnoRestClient::new(server.url("/api/v1"), TIMEOUT)?;
    let use_case = AggregatedRetrieval::new(soap_client, rest_client);

    let err = use_case.execute("user123").await.unwrap_err();

    soap_mock.assert();
    rest_mock.assert();

    match err {
        MvnoError::RetrievalError { user_id, source } => {
            assert_eq!(user_id, "user123");
            assert!(matches!(*source, MvnoError::TransportError(_)));
        }
        other => panic!("expected RetrievalError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_aggregated_fails_when_charge_source_rejects() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/user123/usage");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usage_response("user123"));
    });

    let soap_client = MvnoSoapClient::new(server.url("/soap"), TIMEOUT)?;
    let rest_client = MvnoRestClient::new(server.url("/api/v1"), TIMEOUT)?;
    let use_case = AggregatedRetrieval::new(soap_client, rest_client);

    let err = use_case.execute("user123").await.unwrap_err();
    assert!(matches!(err, MvnoError::RetrievalError { .. }));

    Ok(())
}

#[tokio::test]
async fn test_usage_only_retrieval_returns_fragment_without_charges() -> Result<()> {
    let server = MockServer::start();

    let rest_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/user123/usage");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usage_response("user123"));
    });

    let rest_client = MvnoRestClient::new(server.url("/api/v1"), TIMEOUT)?;
    let use_case = UsageDataRetrieval::new(rest_client);

    let fragment = use_case.execute("user123").await?;

    rest_mock.assert();
    assert_eq!(fragment.user_id.as_deref(), Some("user123"));
    assert!(fragment.usage_data.is_some());
    assert!(fragment.billing_period.is_some());
    assert!(fragment.sms_charges.is_none());

    Ok(())
}

#[tokio::test]
async fn test_sms_only_retrieval_returns_fragment_without_usage() -> Result<()> {
    let server = MockServer::start();

    let soap_mock = server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(soap_response("user123"));
    });

    let soap_client = MvnoSoapClient::new(server.url("/soap"), TIMEOUT)?;
    let use_case = SmsChargeRetrieval::new(soap_client);

    let fragment = use_case.execute("user123").await?;

    soap_mock.assert();
    assert_eq!(fragment.user_id.as_deref(), Some("user123"));
    assert_eq!(fragment.sms_charges.unwrap().len(), 1);
    assert!(fragment.usage_data.is_none());
    assert!(fragment.billing_period.is_none());

    Ok(())
}

#[tokio::test]
async fn test_unparseable_soap_body_is_wrapped_with_user_id() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body("<not-an-envelope/>");
    });

    let soap_client = MvnoSoapClient::new(server.url("/soap"), TIMEOUT)?;
    let use_case = SmsChargeRetrieval::new(soap_client);

    let err = use_case.execute("user123").await.unwrap_err();
    match err {
        MvnoError::RetrievalError { user_id, source } => {
            assert_eq!(user_id, "user123");
            assert!(matches!(*source, MvnoError::XmlError(_)));
        }
        other => panic!("expected RetrievalError, got {other:?}"),
    }

    Ok(())
}
