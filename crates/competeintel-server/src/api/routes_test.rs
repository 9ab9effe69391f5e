use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use competeintel_core::{AppConfig, Environment};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "debug".to_string(),
        api_title: "CompeteIntel API".to_string(),
        api_version: "1.0.0".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        mock_seed: 42,
        mock_segment_size: 10,
    }
}

fn app() -> Router {
    let config = test_config();
    build_app(AppState {
        catalog: Arc::new(MockCatalog::generate(config.mock_seed, config.mock_segment_size)),
        config: Arc::new(config),
    })
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    read(response).await
}

async fn post_search(body: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/search")
                .header(header::CONTENT_TYPE, "application/json")
                .header(REQUEST_ID_HEADER, "test-req")
                .body(Body::from(body.to_owned()))
                .expect("request"),
        )
        .await
        .expect("response");
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

#[test]
fn api_error_codes_map_to_status() {
    let cases = [
        ("validation_error", StatusCode::BAD_REQUEST),
        ("invalid_cnpj", StatusCode::BAD_REQUEST),
        ("invalid_body", StatusCode::BAD_REQUEST),
        ("not_found", StatusCode::NOT_FOUND),
        ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, status) in cases {
        let response = ApiError::new("req-1", code, "x").into_response();
        assert_eq!(response.status(), status, "{code}");
    }
}

#[tokio::test]
async fn health_reports_mock_mode() {
    for uri in ["/", "/api/health"] {
        let (status, json) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["name"], "CompeteIntel API");
        assert_eq!(json["environment"], "test");
        assert_eq!(json["using_mock_data"], true);
        assert_eq!(json["competitors_loaded"], 800);
    }
}

#[tokio::test]
async fn categories_lists_eight_with_cnae() {
    let (status, json) = get_json("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let categories = json["categories"].as_array().expect("array");
    assert_eq!(categories.len(), 8);
    assert_eq!(categories[0]["name"], "Padaria");
    assert!(categories.iter().any(|c| c["name"] == "Farmácia"));
    assert!(categories.iter().all(|c| c["cnae_code"].is_string()));
}

#[tokio::test]
async fn cities_lists_ten_with_state_codes() {
    let (status, json) = get_json("/api/cities").await;
    assert_eq!(status, StatusCode::OK);
    let cities = json["cities"].as_array().expect("array");
    assert_eq!(cities.len(), 10);
    assert_eq!(cities[0]["name"], "São Paulo");
    assert_eq!(cities[0]["state"], "SP");
    assert!(cities[0]["coordinates"]["latitude"].is_f64());
}

#[tokio::test]
async fn search_returns_sorted_competitors_and_analytics() {
    let body = json!({
        "category": "Padaria",
        "city": "São Paulo",
        "radius_km": 5.0,
        "max_results": 10
    });
    let (status, json) = post_search(&body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let competitors = json["competitors"].as_array().expect("competitors");
    assert_eq!(json["total_found"].as_u64(), Some(competitors.len() as u64));
    assert!(competitors.len() <= 10);
    let distances: Vec<f64> = competitors
        .iter()
        .map(|c| c["distance_km"].as_f64().expect("distance"))
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert!(distances.iter().all(|d| *d <= 5.0));

    assert_eq!(
        json["analytics"]["market_density"]["total_competitors"].as_u64(),
        Some(competitors.len() as u64)
    );
    assert!(json["analytics"]["summary"].is_string());
    assert!(json["analytics"]["competitive_positioning"].is_null());
    assert_eq!(json["search_radius_km"], 5.0);
}

#[tokio::test]
async fn search_with_business_name_includes_positioning() {
    let body = json!({
        "category": "Cafeteria",
        "city": "Recife",
        "business_name": "Café do Porto",
        "radius_km": 10.0
    });
    let (status, json) = post_search(&body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["analytics"]["competitive_positioning"]["your_ranking"].is_u64());
}

#[tokio::test]
async fn search_rejects_radius_below_minimum() {
    let body = json!({ "category": "Padaria", "city": "São Paulo", "radius_km": 0.3 });
    let (status, json) = post_search(&body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "validation_error");
    assert_eq!(json["request_id"], "test-req");
    assert!(json["detail"]
        .as_str()
        .is_some_and(|d| d.contains("radius_km")));
}

#[tokio::test]
async fn search_rejects_unknown_city() {
    let body = json!({ "category": "Padaria", "city": "Gotham" });
    let (status, json) = post_search(&body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "unsupported city: Gotham");
}

#[tokio::test]
async fn search_rejects_missing_category() {
    let (status, json) = post_search(r#"{ "city": "São Paulo" }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "category is required");
}

#[tokio::test]
async fn malformed_body_is_invalid_body() {
    let (status, json) = post_search("{ not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_body");
}

#[tokio::test]
async fn cnpj_lookup_formats_valid_number() {
    let (status, json) = get_json("/api/cnpj/11222333000181").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cnpj"], "11.222.333/0001-81");
    assert_eq!(json["status"], "ATIVA");
}

#[tokio::test]
async fn cnpj_lookup_rejects_bad_check_digits() {
    let (status, json) = get_json("/api/cnpj/11222333000182").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_cnpj");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, json) = get_json("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "not_found");
    assert!(json["request_id"].is_string());
}
