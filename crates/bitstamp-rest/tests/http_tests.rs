//! Wire-level tests against a mock HTTP server

use bitstamp_rest::{
    BitstampRestClient, ClientConfig, Credentials, OrderParams, RestError, TransactionWindow,
};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_credentials() -> Credentials {
    Credentials::new("1234", "apikey123", "topsecret")
}

fn public_client(server: &MockServer) -> BitstampRestClient {
    BitstampRestClient::with_config(
        ClientConfig::new().with_base_url(format!("{}/api/", server.uri())),
    )
}

fn private_client(server: &MockServer) -> BitstampRestClient {
    BitstampRestClient::with_config(
        ClientConfig::new()
            .with_base_url(format!("{}/api/", server.uri()))
            .with_credentials(test_credentials()),
    )
}

fn form_fields(body: &[u8]) -> Vec<(String, String)> {
    serde_urlencoded::from_bytes(body).expect("form body should parse")
}

#[tokio::test]
async fn ticker_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ticker/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "last": "100.0",
            "high": "105.0",
            "low": "95.0",
            "volume": "1234.5",
            "bid": "99.9",
            "ask": "100.1",
        })))
        .mount(&server)
        .await;

    let ticker = public_client(&server).ticker().await.unwrap();
    assert_eq!(ticker.last, dec!(100.0));
    assert_eq!(ticker.bid, dec!(99.9));
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ticker/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = public_client(&server).ticker().await.unwrap_err();
    assert!(matches!(err, RestError::Parse(_)));
}

#[tokio::test]
async fn empty_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ticker/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let err = public_client(&server).ticker().await.unwrap_err();
    assert!(matches!(err, RestError::Parse(_)));
}

#[tokio::test]
async fn private_request_carries_auth_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usd_balance": "1000.00",
            "btc_balance": "2.50000000",
            "usd_reserved": "0.00",
            "btc_reserved": "0.00000000",
            "usd_available": "1000.00",
            "btc_available": "2.50000000",
            "fee": "0.5000",
        })))
        .mount(&server)
        .await;

    let balance = private_client(&server).balance().await.unwrap();
    assert_eq!(balance.usd_available, dec!(1000.00));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok());
    assert_eq!(content_type, Some("application/x-www-form-urlencoded"));

    let fields = form_fields(&requests[0].body);
    let get = |name: &str| {
        fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    };

    assert_eq!(get("key"), Some("apikey123"));

    let nonce = get("nonce").expect("nonce should be present");
    assert!(nonce.chars().all(|c| c.is_ascii_digit()));

    // The signature in the body must match an independent recomputation
    // over the nonce that was actually sent.
    assert_eq!(get("signature"), Some(test_credentials().sign(nonce).as_str()));
}

#[tokio::test]
async fn reserved_fields_win_over_caller_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/open_orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = private_client(&server);
    let _: serde_json::Value = client
        .private_request(
            "open_orders",
            &[
                ("key", "forged"),
                ("nonce", "1"),
                ("signature", "forged"),
                ("offset", "5"),
            ],
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let fields = form_fields(&requests[0].body);

    for reserved in ["key", "nonce", "signature"] {
        let occurrences: Vec<_> = fields
            .iter()
            .filter(|(field, _)| field == reserved)
            .collect();
        assert_eq!(occurrences.len(), 1, "{} must appear exactly once", reserved);
        assert_ne!(occurrences[0].1, "forged");
    }

    let nonce = &fields.iter().find(|(field, _)| field == "nonce").unwrap().1;
    assert_ne!(nonce.as_str(), "1");

    // Non-reserved caller params pass through untouched
    assert!(fields.contains(&("offset".to_string(), "5".to_string())));
}

#[tokio::test]
async fn transactions_window_goes_out_under_the_hour_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions/"))
        .and(query_param("hour", "minute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let transactions = public_client(&server)
        .transactions(TransactionWindow::Minute)
        .await
        .unwrap();
    assert!(transactions.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("hour=minute"));
}

#[tokio::test]
async fn cancel_order_carries_the_order_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cancel_order"))
        .and(body_string_contains("id=42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;

    let canceled = private_client(&server).cancel_order(42).await.unwrap();
    assert!(canceled);
}

#[tokio::test]
async fn buy_order_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/buy"))
        .and(body_string_contains("amount=0.5"))
        .and(body_string_contains("price=800"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 55,
            "datetime": "2014-01-08 12:16:33",
            "type": 0,
            "price": "800.00",
            "amount": "0.50000000",
        })))
        .mount(&server)
        .await;

    let order = private_client(&server)
        .buy(&OrderParams::new(dec!(0.5), dec!(800)))
        .await
        .unwrap();
    assert_eq!(order.id, 55);
    assert_eq!(order.side, 0);
    assert_eq!(order.price, dec!(800.00));
}

#[tokio::test]
async fn query_values_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/echo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let _: serde_json::Value = public_client(&server)
        .public_request("echo", &[("q", "a&b=c d")])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("q=a%26b%3Dc+d"));
}

#[tokio::test]
async fn remote_error_payload_surfaces_as_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/balance"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "API key not found"})),
        )
        .mount(&server)
        .await;

    let err = private_client(&server).balance().await.unwrap_err();
    match err {
        RestError::Api { message } => assert_eq!(message, "API key not found"),
        other => panic!("expected Api error, got {:?}", other),
    }
}
