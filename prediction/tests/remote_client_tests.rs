use prediction::model::Credentials;
use prediction::remote::{PredictionClientError, PredictionServiceClient, PredictionServiceConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PredictionServiceClient {
    PredictionServiceClient::new(PredictionServiceConfig {
        base_url: server.uri().parse().unwrap(),
        credentials: Credentials {
            username: "procurement".to_string(),
            password: "secret".to_string(),
        },
    })
    .unwrap()
}

fn login_ok(jwt: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": { "user": { "jwt": jwt, "name": "Procurement Bot" } }
    }))
}

#[tokio::test]
async fn login_then_predict_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "procurement", "password": "secret" })))
        .respond_with(login_ok("token-123"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/projects/model/test/proj-cement-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "predictions": [{ "label": "High", "confidence": 0.93 }] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let predictions = client_for(&server)
        .predict("proj-cement-01", json!({ "year": 2024, "month": 5 }))
        .await
        .unwrap();

    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].label.as_deref(), Some("High"));
    assert_eq!(predictions[0].extra["confidence"], json!(0.93));
}

#[tokio::test]
async fn failed_login_skips_the_predict_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    // The predict endpoint must never be reached after a login failure.
    Mock::given(method("POST"))
        .and(path("/api/projects/model/test/proj-cement-01"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict("proj-cement-01", json!({}))
        .await
        .unwrap_err();

    match err {
        PredictionClientError::Authentication { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "bad credentials");
        }
        other => panic!("expected Authentication, got: {other:?}"),
    }
}

#[tokio::test]
async fn failed_predict_carries_the_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(login_ok("token-123"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/projects/model/test/proj-cement-01"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict("proj-cement-01", json!({}))
        .await
        .unwrap_err();

    match err {
        PredictionClientError::Prediction { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "model unavailable");
        }
        other => panic!("expected Prediction, got: {other:?}"),
    }
}

#[tokio::test]
async fn empty_predictions_is_a_valid_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(login_ok("token-123"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/projects/model/test/proj-timber-01"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "predictions": [] } })),
        )
        .mount(&server)
        .await;

    let predictions = client_for(&server)
        .predict("proj-timber-01", json!({}))
        .await
        .unwrap();
    assert!(predictions.is_empty());
}

#[tokio::test]
async fn bearer_token_from_login_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(login_ok("token-456"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/projects/model/test/proj-cement-01"))
        .and(header("Authorization", "Bearer token-456"))
        .and(body_json(json!({ "input": { "material": "Cement" } })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "predictions": [] } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .predict("proj-cement-01", json!({ "material": "Cement" }))
        .await
        .unwrap();
}

#[tokio::test]
async fn malformed_login_envelope_is_a_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict("proj-cement-01", json!({}))
        .await
        .unwrap_err();

    match err {
        PredictionClientError::Schema { endpoint, .. } => assert_eq!(endpoint, "login"),
        other => panic!("expected Schema, got: {other:?}"),
    }
}
