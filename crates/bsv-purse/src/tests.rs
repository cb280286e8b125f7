//! Tests for the swipe and paymail HTTP clients.

use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::paymail::{HandleResolver, PaymailClient, PaymailConfig, ResolverError, SenderRequest};
use crate::swipe::{
    FundsSource, FundsSourceError, IdentityRequest, PaymentRequest, SwipeClient, SwipeConfig,
    USER_PAYMAIL,
};

fn swipe_client(server: &MockServer) -> SwipeClient {
    SwipeClient::new(SwipeConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
    })
}

fn paymail_client(server: &MockServer) -> PaymailClient {
    PaymailClient::new(PaymailConfig {
        discovery_base_url: Some(server.uri()),
    })
}

fn sender() -> SenderRequest {
    SenderRequest::new("alice@example.com", "2024-01-01T00:00:00.000Z", "signature")
}

async fn mount_capabilities(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/.well-known/bsvalias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bsvalias": "1.0",
            "capabilities": {
                "pki": format!("{}/api/id/{{alias}}@{{domain.tld}}", server.uri()),
                "paymentDestination":
                    format!("{}/api/address/{{alias}}@{{domain.tld}}", server.uri()),
                "a9f510c16bde": true
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_request_payment_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/swipe"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(serde_json::json!({
            "to": "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr",
            "amount": "547",
            "currency": "BSV-SAT"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payment": { "txid": "ab".repeat(32), "rawtx": "01000000000000000000" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payment = swipe_client(&server)
        .request_payment(&PaymentRequest {
            to: "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr".to_string(),
            amount: 547,
            currency: "BSV-SAT".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(payment.txid, "ab".repeat(32));
    assert_eq!(payment.rawtx, "01000000000000000000");
}

#[tokio::test]
async fn test_request_payment_without_payment_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/swipe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let result = swipe_client(&server)
        .request_payment(&PaymentRequest {
            to: "addr".to_string(),
            amount: 1000,
            currency: "BSV-SAT".to_string(),
        })
        .await;

    assert!(matches!(result, Err(FundsSourceError::MissingPayment)));
}

#[tokio::test]
async fn test_swipe_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/swipe"))
        .respond_with(ResponseTemplate::new(402).set_body_string("insufficient funds"))
        .mount(&server)
        .await;

    let result = swipe_client(&server)
        .request_payment(&PaymentRequest {
            to: "addr".to_string(),
            amount: 1000,
            currency: "BSV-SAT".to_string(),
        })
        .await;

    match result {
        Err(FundsSourceError::Rejected { status, message }) => {
            assert_eq!(status, 402);
            assert_eq!(message, "insufficient funds");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_swipe_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/swipe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = swipe_client(&server)
        .resolve_identity(&IdentityRequest::user_paymail())
        .await;

    assert!(matches!(result, Err(FundsSourceError::SerializationError(_))));
}

#[tokio::test]
async fn test_resolve_identity() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/swipe"))
        .and(body_json(serde_json::json!({
            "cryptoOperations": [{ "name": "userPaymail", "method": "paymail" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cryptoOperations": [
                { "name": "userPaymail", "method": "paymail", "value": "alice@example.com" }
            ]
        })))
        .mount(&server)
        .await;

    let identity = swipe_client(&server)
        .resolve_identity(&IdentityRequest::user_paymail())
        .await
        .unwrap();

    assert_eq!(identity.value_of(USER_PAYMAIL), Some("alice@example.com"));
    assert_eq!(identity.value_of("other"), None);
}

#[test]
fn test_identity_empty_value_is_absent() {
    let identity: crate::swipe::IdentityResponse = serde_json::from_value(serde_json::json!({
        "cryptoOperations": [{ "name": "userPaymail", "value": "" }]
    }))
    .unwrap();
    assert_eq!(identity.value_of(USER_PAYMAIL), None);
}

#[test]
fn test_payment_request_amount_is_a_string() {
    let request = PaymentRequest {
        to: "addr".to_string(),
        amount: 712,
        currency: "BSV-SAT".to_string(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["amount"], "712");

    let back: PaymentRequest = serde_json::from_value(json).unwrap();
    assert_eq!(back, request);
}

#[tokio::test]
async fn test_get_output_for_success() {
    let server = MockServer::start().await;
    mount_capabilities(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/address/alice@example.com"))
        .and(body_partial_json(serde_json::json!({
            "senderHandle": "alice@example.com",
            "signature": "signature",
            "dt": "2024-01-01T00:00:00.000Z"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": "76a9148fe80c75c9560e8b56ed64ea3c26e18d2c52211b88ac"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = paymail_client(&server)
        .get_output_for("alice@Example.com", &sender())
        .await
        .unwrap();

    assert_eq!(output, "76a9148fe80c75c9560e8b56ed64ea3c26e18d2c52211b88ac");
}

#[tokio::test]
async fn test_get_output_for_unknown_handle() {
    let server = MockServer::start().await;
    mount_capabilities(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/address/nobody@example.com"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = paymail_client(&server)
        .get_output_for("nobody@example.com", &sender())
        .await;

    assert!(matches!(result, Err(ResolverError::UnknownHandle)));
}

#[tokio::test]
async fn test_get_output_for_missing_capability() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.well-known/bsvalias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bsvalias": "1.0",
            "capabilities": { "pki": "https://example.com/id/{alias}@{domain.tld}" }
        })))
        .mount(&server)
        .await;

    let result = paymail_client(&server)
        .get_output_for("alice@example.com", &sender())
        .await;

    assert!(matches!(result, Err(ResolverError::CapabilityMissing)));
}

#[tokio::test]
async fn test_get_output_for_server_error() {
    let server = MockServer::start().await;
    mount_capabilities(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/address/alice@example.com"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = paymail_client(&server)
        .get_output_for("alice@example.com", &sender())
        .await;

    match result {
        Err(ResolverError::Rejected { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_output_for_validates_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = paymail_client(&server);

    let bad_handle = client.get_output_for("not-a-handle", &sender()).await;
    assert!(matches!(bad_handle, Err(ResolverError::InvalidHandle(_))));

    let mut unsigned = sender();
    unsigned.signature.clear();
    let missing = client.get_output_for("alice@example.com", &unsigned).await;
    assert!(matches!(missing, Err(ResolverError::MissingField("signature"))));

    let mut undated = sender();
    undated.dt.clear();
    let missing = client.get_output_for("alice@example.com", &undated).await;
    assert!(matches!(missing, Err(ResolverError::MissingField("dt"))));
}

#[test]
fn test_handle_parsing() {
    use crate::paymail::PaymailHandle;

    let handle: PaymailHandle = "Alice@Example.COM".parse().unwrap();
    assert_eq!(handle.alias, "Alice");
    assert_eq!(handle.domain, "example.com");
    assert_eq!(handle.to_string(), "Alice@example.com");

    for bad in ["", "alice", "@example.com", "alice@", "a@b@c", "al ice@example.com"] {
        assert!(bad.parse::<PaymailHandle>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn test_sender_request_json_shape() {
    let mut request = sender();
    request.amount = Some(900);
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "senderHandle": "alice@example.com",
            "dt": "2024-01-01T00:00:00.000Z",
            "signature": "signature",
            "amount": 900
        })
    );
}
