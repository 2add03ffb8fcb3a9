use axum::body::Body;
use axum::http::{Request, StatusCode};
use flavornet::config::RenderConfig;
use flavornet::dashboard::DataContext;
use flavornet::data::EdgeRecord;
use flavornet::http::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn state() -> Arc<AppState> {
    Arc::new(AppState {
        ctx: DataContext::new(vec![
            EdgeRecord::new("a", "b", 0.1),
            EdgeRecord::new("a", "c", 0.5),
            EdgeRecord::new("b", "c", 0.9),
        ]),
        render: RenderConfig::default(),
    })
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = build_router(state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_status() {
    let (status, body) = get("/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["data"]["edges"], 3);
    assert_eq!(body["data"]["ingredients"], 3);
}

#[tokio::test]
async fn test_controls() {
    let (status, body) = get("/api/controls").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ingredients"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(body["threshold"]["value"], 0.1);
    assert_eq!(body["threshold"]["marks"], serde_json::json!([0.1, 0.5, 0.9]));
}

#[tokio::test]
async fn test_figures_for_selection() {
    let (status, body) = get("/api/figures?threshold=0.3&ingredient=c").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["edges"], 2);
    assert_eq!(body["summary"]["selected_in_network"], true);
    // two edge traces + one node trace
    assert_eq!(body["network"]["data"].as_array().map(|d| d.len()), Some(3));
    assert_eq!(body["network"]["data"][0]["type"], "scattergl");
}

#[tokio::test]
async fn test_figures_default_threshold_is_minimum() {
    let (status, body) = get("/api/figures").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["threshold"], 0.1);
    assert_eq!(body["summary"]["edges"], 2);
}

#[tokio::test]
async fn test_edges_rescaled() {
    let (status, body) = get("/api/edges?threshold=0.3&k=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rescaled"][0]["weight"], 0.0);
    assert_eq!(body["rescaled"][1]["weight"], 3.0);
    assert_eq!(body["edges"][1]["weight"], 0.9);
}

#[tokio::test]
async fn test_bad_parameters_are_rejected() {
    let (status, body) = get("/api/figures?threshold=NaN").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("threshold"));

    let (status, body) = get("/api/edges?threshold=0.3&k=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("rescale"));
}

#[tokio::test]
async fn test_unparseable_numbers_get_json_errors() {
    let (status, body) = get("/api/figures?threshold=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid threshold \"lots\": expected a number");

    let (status, body) = get("/api/edges?threshold=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("threshold"));

    let (status, body) = get("/api/edges?k=big").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("\"big\""));
}

#[tokio::test]
async fn test_empty_threshold_uses_default() {
    let (status, body) = get("/api/figures?threshold=&ingredient=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["threshold"], 0.1);
    assert_eq!(body["summary"]["selected"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_index_page() {
    let response = build_router(state())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8_lossy(&bytes);
    assert!(page.contains("network-graph"));
}
