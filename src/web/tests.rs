use std::collections::HashMap;

use poem::http::StatusCode;
use poem::test::TestClient;
use poem::Endpoint;
use serde_json::json;

use super::*;
use crate::cache::{FailingCache, MemoryCache, PredictionCache};
use crate::opts::AuthOpts;
use crate::predictor::model::Column;
use crate::predictor::{Predictor, PriceModel};
use crate::prelude::*;

const API_KEY: &str = "test-key";

fn test_state(cache: Arc<dyn PredictionCache>) -> State {
    let opts = AuthOpts {
        api_key: API_KEY.to_string(),
        jwt_secret: "test-secret".to_string(),
        token_ttl: StdDuration::from_secs(1800),
        username: "admin".to_string(),
        password: "adminpass".to_string(),
    };
    let model = PriceModel {
        intercept: 400_000.0,
        columns: vec![
            Column::Numeric { name: "max_power".to_string(), coefficient: 1000.0 },
            Column::Categorical {
                name: "company".to_string(),
                weights: HashMap::from([("maruti".to_string(), 9_000.0)]),
                unknown_weight: 0.0,
            },
        ],
    };
    State::new(&opts, Predictor::new(model, cache))
}

fn test_client() -> (State, TestClient<impl Endpoint>) {
    let state = test_state(Arc::new(MemoryCache::default()));
    let client = TestClient::new(create_app(state.clone()));
    (state, client)
}

fn payload() -> serde_json::Value {
    json!({
        "company": "maruti",
        "year": 2015,
        "owner": "First",
        "fuel": "Petrol",
        "seller_type": "Dealer",
        "transmission": "Manual",
        "km_driven": "50000",
        "mileage_mpg": "18.0",
        "engine_cc": "1197",
        "max_power": "74",
        "torque_nm": "100",
        "seats": 5.0,
    })
}

async fn login(client: &TestClient<impl Endpoint>) -> String {
    let response = client
        .post("/auth/login")
        .body_json(&json!({"username": "admin", "password": "adminpass"}))
        .send()
        .await;
    response.assert_status_is_ok();
    response.json().await.value().object().get("access_token").string().to_string()
}

#[tokio::test]
async fn login_ok() {
    let (_, client) = test_client();
    let token = login(&client).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let (_, client) = test_client();
    let response = client
        .post("/auth/login")
        .body_json(&json!({"username": "admin", "password": "letmein"}))
        .send()
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn predict_ok() {
    let (_, client) = test_client();
    let token = login(&client).await;

    let response = client
        .post("/api/predict")
        .header("api-key", API_KEY)
        .header("token", &token)
        .body_json(&payload())
        .send()
        .await;
    response.assert_status_is_ok();
    let first = response.json().await.value().object().get("predicted_price").f64();
    assert_eq!(first, 483_000.0);

    // The repeat goes through the cache and must not change the answer.
    let response = client
        .post("/api/predict")
        .header("api-key", API_KEY)
        .header("token", &token)
        .body_json(&payload())
        .send()
        .await;
    response.assert_status_is_ok();
    let second = response.json().await.value().object().get("predicted_price").f64();
    assert_eq!(second, first);
}

#[tokio::test]
async fn predict_accepts_the_authorization_header() {
    let (_, client) = test_client();
    let token = login(&client).await;
    let response = client
        .post("/api/predict")
        .header("api-key", API_KEY)
        .header("authorization", format!("Bearer {token}"))
        .body_json(&payload())
        .send()
        .await;
    response.assert_status_is_ok();
}

#[tokio::test]
async fn predict_without_api_key_fails() {
    let (_, client) = test_client();
    let token = login(&client).await;
    let response =
        client.post("/api/predict").header("token", &token).body_json(&payload()).send().await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn predict_with_wrong_api_key_fails() {
    let (_, client) = test_client();
    let token = login(&client).await;
    let response = client
        .post("/api/predict")
        .header("api-key", "wrong-key")
        .header("token", &token)
        .body_json(&payload())
        .send()
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn predict_without_token_fails() {
    let (_, client) = test_client();
    let response =
        client.post("/api/predict").header("api-key", API_KEY).body_json(&payload()).send().await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn predict_with_expired_token_fails() {
    let (state, client) = test_client();
    let token = state
        .tokens
        .issue_expiring_at("admin", chrono::Utc::now() - chrono::Duration::minutes(5))
        .unwrap();
    let response = client
        .post("/api/predict")
        .header("api-key", API_KEY)
        .header("token", &token)
        .body_json(&payload())
        .send()
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn predict_with_missing_field_fails() {
    let (_, client) = test_client();
    let token = login(&client).await;
    let response = client
        .post("/api/predict")
        .header("api-key", API_KEY)
        .header("token", &token)
        .body_json(&json!({"company": "maruti", "year": 2015}))
        .send()
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn predict_survives_an_unreachable_cache() {
    let state = test_state(Arc::new(FailingCache));
    let client = TestClient::new(create_app(state.clone()));
    let token = login(&client).await;
    let response = client
        .post("/api/predict")
        .header("api-key", API_KEY)
        .header("token", &token)
        .body_json(&payload())
        .send()
        .await;
    response.assert_status_is_ok();
    let price = response.json().await.value().object().get("predicted_price").f64();
    assert_eq!(price, 483_000.0);
}

#[tokio::test]
async fn health_ok() {
    let (_, client) = test_client();
    let response = client.get("/api/health").send().await;
    response.assert_status(StatusCode::NO_CONTENT);
}
