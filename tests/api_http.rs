// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /api/predict (typed, stringly, partial, and malformed bodies)
// - GET /debug/history and /debug/last-assessment

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

use heart_risk_api::api::{self, AppState};

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses (minus static files and metrics).
fn test_router() -> Router {
    api::router(AppState::default())
}

fn post_json(uri: &str, body: &Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

async fn read_json(resp: axum::response::Response) -> Json {
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn health_returns_200_and_ok_body() {
    let app = test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    assert_eq!(String::from_utf8(bytes).expect("utf8").trim(), "ok");
}

#[tokio::test]
async fn predict_returns_all_contract_fields() {
    let app = test_router();

    let payload = json!({
        "age": 63, "sex": 1, "cp": 3, "trestbps": 145, "chol": 233,
        "fbs": 1, "restecg": 0, "thalach": 150, "exang": 0,
        "oldpeak": 2.3, "slope": 0, "ca": 0, "thal": 1
    });
    let resp = app
        .oneshot(post_json("/api/predict", &payload))
        .await
        .expect("oneshot /api/predict");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = read_json(resp).await;

    // Contract checks for UI consumers
    assert_eq!(v["prediction"], json!(1));
    assert_eq!(v["probability"], json!(0.957));
    assert_eq!(v["confidence"], json!(91));
    assert_eq!(v["riskScore"], json!(3.1));
    assert_eq!(v["riskCategory"], json!("🚨 Very High Risk"));
}

#[tokio::test]
async fn predict_coerces_form_style_string_values() {
    let app = test_router();

    // The form UI submits every field as a string.
    let payload = json!({
        "age": "63", "sex": "1", "cp": "3", "trestbps": "145", "chol": "233",
        "fbs": "1", "restecg": "0", "thalach": "150", "exang": "0",
        "oldpeak": "2.3", "slope": "0", "ca": "0", "thal": "1"
    });
    let resp = app
        .oneshot(post_json("/api/predict", &payload))
        .await
        .expect("oneshot /api/predict");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = read_json(resp).await;
    assert_eq!(v["riskScore"], json!(3.1));
    assert_eq!(v["riskCategory"], json!("🚨 Very High Risk"));
}

#[tokio::test]
async fn predict_treats_missing_and_garbage_fields_as_zero() {
    let app = test_router();

    // Only one usable field; the rest are absent or unparseable.
    let payload = json!({ "age": "not-a-number", "thalach": 185, "oldpeak": null });
    let resp = app
        .oneshot(post_json("/api/predict", &payload))
        .await
        .expect("oneshot /api/predict");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = read_json(resp).await;
    // age 0 → -0.5, cp 0 → +0.6, trestbps 0 → -0.1, chol 0 → -0.2,
    // thalach 185 → -0.4, oldpeak 0 → -0.2, slope 0 → -0.3, ca 0 → -0.4,
    // thal 0 → -0.2; total -1.7.
    assert_eq!(v["riskScore"], json!(-1.7));
    assert_eq!(v["prediction"], json!(0));
}

#[tokio::test]
async fn malformed_body_yields_disjoint_error_shape() {
    let app = test_router();

    let req = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from("{not valid json"))
        .expect("build request");

    let resp = app.oneshot(req).await.expect("oneshot /api/predict");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let v = read_json(resp).await;
    assert!(v.get("error").is_some(), "expected an 'error' field");
    assert!(
        v.get("riskCategory").is_none(),
        "error shape must not carry assessment fields"
    );
}

#[tokio::test]
async fn debug_endpoints_reflect_prior_predictions() {
    let app = test_router();

    let payload = json!({
        "age": 25, "sex": 0, "cp": 2, "trestbps": 110, "chol": 180,
        "fbs": 0, "restecg": 0, "thalach": 185, "exang": 0,
        "oldpeak": 0, "slope": 0, "ca": 0, "thal": 0
    });
    let resp = app
        .clone()
        .oneshot(post_json("/api/predict", &payload))
        .await
        .expect("oneshot /api/predict");
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("GET")
        .uri("/debug/last-assessment")
        .body(Body::empty())
        .expect("build GET /debug/last-assessment");
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("oneshot /debug/last-assessment");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = read_json(resp).await;
    assert_eq!(v["category"], json!("✅ No Risk"));
    assert_eq!(v["prediction"], json!(0));
    assert!(v["ts"].is_string());

    let req = Request::builder()
        .method("GET")
        .uri("/debug/history")
        .body(Body::empty())
        .expect("build GET /debug/history");
    let resp = app.oneshot(req).await.expect("oneshot /debug/history");
    let v = read_json(resp).await;
    assert_eq!(v.as_array().map(|a| a.len()), Some(1));
}
