//! End-to-end smoke tests for the full bayanchord stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`; no TCP port is bound.

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bayanchor_adapter_http_axum::router;
use bayanchor_adapter_http_axum::state::AppState;
use bayanchor_adapter_storage_sqlite_sqlx::{Config, SqliteShipmentRepository};
use bayanchor_app::services::shipment_service::ShipmentService;
use bayanchor_domain::stat::Stat;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app_with_dashboard(dashboard_dir: Option<&Path>) -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteShipmentRepository::new(db.pool().clone());
    let state = AppState::new(
        ShipmentService::new(repo),
        vec![
            Stat::new(190.0, "Countries served").with_suffix("+"),
            Stat::new(4.2, "Cargo insured").with_prefix("$").with_suffix("M"),
        ],
    );

    router::build(state, dashboard_dir)
}

async fn app() -> axum::Router {
    app_with_dashboard(None).await
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn put_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn full_shipment() -> serde_json::Value {
    serde_json::json!({
        "trackingNumber": "BAY-20250307-001",
        "sender": { "name": "Ada Obi", "address": "12 Marina Rd, Lagos", "phone": "+234 800 000 0000" },
        "receiver": { "name": "Lars Berg", "address": "Storgatan 4, Oslo" },
        "package": {
            "weight": 12.5,
            "dimensions": { "length": 40, "width": 30, "height": 20, "unit": "cm" },
            "quantity": 2,
            "declaredValue": { "amount": 1234.5, "currency": "USD" },
            "description": "Machine parts"
        },
        "carrier": { "name": "Nordic Freight", "trackingCode": "NF-88231", "mode": "AIR" },
        "shipmentMode": "Sea",
        "serviceType": "SAME_DAY_EXPRESS",
        "createdAt": "2025-03-07T09:00:00Z",
        "updatedAt": "2025-03-09T18:30:00Z"
    })
}

fn bare_shipment() -> serde_json::Value {
    serde_json::json!({
        "trackingNumber": "BAY-20250307-002",
        "sender": { "name": "Ada Obi", "address": "12 Marina Rd, Lagos" },
        "receiver": { "name": "Lars Berg", "address": "Storgatan 4, Oslo" },
        "package": { "weight": 2 },
        "serviceType": "EXPRESS_FREIGHT",
        "createdAt": "2025-03-07T09:00:00Z",
        "updatedAt": "2025-03-07T09:00:00Z"
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = send(app().await, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_configured_stats_in_order() {
    let (status, body) = send(app().await, get("/api/stats")).await;
    assert_eq!(status, StatusCode::OK);

    let stats: Vec<Stat> = serde_json::from_str(&body).unwrap();
    let shown: Vec<String> = stats.iter().map(Stat::final_display).collect();
    assert_eq!(shown, vec!["190+", "$4.2M"]);
}

// ---------------------------------------------------------------------------
// Shipments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_store_then_present_full_shipment() {
    let app = app().await;

    let (status, _) = send(
        app.clone(),
        put_json("/api/shipments/BAY-20250307-001", &full_shipment()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, get("/api/shipments/bay-20250307-001/details")).await;
    assert_eq!(status, StatusCode::OK);

    let view: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(view["sender"]["phone"], "+234 800 000 0000");
    assert_eq!(view["package"]["weight"], "12.5 kg");
    assert_eq!(view["package"]["length"], "40 cm");
    assert_eq!(view["package"]["quantity"], "2");
    assert_eq!(view["package"]["declaredValue"], "$1,234.50");
    assert_eq!(view["carrier"]["name"], "Nordic Freight");
    assert_eq!(view["carrier"]["reference"], "NF-88231");
    assert_eq!(view["carrier"]["mode"], "air");
    assert_eq!(view["serviceType"], "same day_express");
    assert_eq!(view["shipmentMode"], "sea");
    assert_eq!(view["created"], "3/7/2025");
    assert_eq!(view["lastUpdated"], "3/9/2025");
}

#[tokio::test]
async fn should_present_fallbacks_for_bare_shipment() {
    let app = app().await;
    send(
        app.clone(),
        put_json("/api/shipments/BAY-20250307-002", &bare_shipment()),
    )
    .await;

    let (status, body) = send(app, get("/api/shipments/BAY-20250307-002/details")).await;
    assert_eq!(status, StatusCode::OK);

    let view: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(view["package"]["length"], "\u{2014}");
    assert_eq!(view["package"]["width"], "\u{2014}");
    assert_eq!(view["package"]["height"], "\u{2014}");
    assert_eq!(view["package"]["quantity"], "1");
    assert_eq!(view["package"]["declaredValue"], "\u{2014}");
    assert_eq!(view["package"]["description"], "No description provided");
    assert_eq!(view["carrier"]["name"], "Bayanchor Logistics");
    assert_eq!(view["carrier"]["reference"], "BAY-19CD81");
    assert_eq!(view["carrier"]["mode"], "road");
    assert_eq!(view["serviceType"], "express freight");
}

#[tokio::test]
async fn should_return_raw_record_and_list_it() {
    let app = app().await;
    send(
        app.clone(),
        put_json("/api/shipments/BAY-20250307-002", &bare_shipment()),
    )
    .await;

    let (status, body) = send(app.clone(), get("/api/shipments/BAY-20250307-002")).await;
    assert_eq!(status, StatusCode::OK);
    let record: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(record["package"]["weight"], 2.0);
    assert!(record.get("carrier").is_none());

    let (status, body) = send(app, get("/api/shipments")).await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_shipment() {
    let (status, body) = send(app().await, get("/api/shipments/BAY-0000/details")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("not found"));
}

#[tokio::test]
async fn should_reject_shipment_with_blank_sender_name() {
    let mut shipment = bare_shipment();
    shipment["sender"]["name"] = serde_json::json!("");

    let (status, body) = send(
        app().await,
        put_json("/api/shipments/BAY-20250307-002", &shipment),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("sender.name"));
}

#[tokio::test]
async fn should_return_json_bad_request_when_body_tracking_number_malformed() {
    let mut shipment = bare_shipment();
    shipment["trackingNumber"] = serde_json::json!("no");

    let (status, body) = send(
        app().await,
        put_json("/api/shipments/BAY-20250307-002", &shipment),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("invalid tracking number"));
}

#[tokio::test]
async fn should_return_json_bad_request_when_body_misses_required_field() {
    let mut shipment = bare_shipment();
    shipment.as_object_mut().unwrap().remove("serviceType");

    let (status, body) = send(
        app().await,
        put_json("/api/shipments/BAY-20250307-002", &shipment),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("serviceType"));
}

// ---------------------------------------------------------------------------
// Dashboard hosting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_fall_back_to_dashboard_index_for_client_routes() {
    let dir = std::env::temp_dir().join(format!("bayanchord-dashboard-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<!doctype html><title>bayanchor</title>").unwrap();

    let (status, body) = send(
        app_with_dashboard(Some(&dir)).await,
        get("/track/BAY-20250307-001"),
    )
    .await;

    std::fs::remove_dir_all(&dir).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>bayanchor</title>"));
}
