//! HTTP contract for the configurator: options, availability, quotes, and single-field updates.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use villa_roi::configurator::{configurator_router, VillaConfigurator};

fn build_router() -> axum::Router {
    configurator_router(Arc::new(VillaConfigurator::default()))
}

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, payload)
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize payload")))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn options_lists_every_field_and_defaults() {
    let (status, payload) = send(build_router(), get("/api/v1/configurator/options")).await;

    assert_eq!(status, StatusCode::OK);
    let fields = payload["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[3]["field"], json!("build_style"));
    assert_eq!(fields[3]["options"].as_array().map(Vec::len), Some(4));
    assert_eq!(payload["defaults"]["build_style"], json!("modern"));
    assert_eq!(payload["defaults"]["land_size"], json!(100));
}

#[tokio::test]
async fn availability_reports_legal_variants_for_pair() {
    let (status, payload) = send(
        build_router(),
        get("/api/v1/configurator/availability?build_style=japanese&storeys=1.5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["variants"], json!([{ "value": "default", "label": "Default" }]));
}

#[tokio::test]
async fn quote_reconciles_and_returns_projection() {
    let configuration = json!({
        "bedrooms": 2,
        "storeys": 2,
        "land_size": 200,
        "build_style": "modern",
        "finish_variant": "lush",
    });

    let (status, payload) = send(
        build_router(),
        post_json("/api/v1/configurator/quote", &configuration),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["projection"]["build_cost"], json!(420_000));
    assert_eq!(payload["projection"]["nightly_rate"], json!(560));
    assert_eq!(payload["configuration"]["finish_variant"], json!("lush"));
    assert!(payload.get("variant_reset_from").is_none());
    assert_eq!(payload["image"]["identifier"], json!("modern-2s-200m2-lush.png"));
}

#[tokio::test]
async fn update_applies_single_field_and_resets_finish() {
    let request = json!({
        "configuration": {
            "bedrooms": 1,
            "storeys": 1,
            "land_size": 100,
            "build_style": "modern",
            "finish_variant": "v2",
        },
        "field": "buildStyle",
        "value": "japanese",
    });

    let (status, payload) = send(
        build_router(),
        post_json("/api/v1/configurator/update", &request),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["configuration"]["build_style"], json!("japanese"));
    assert_eq!(payload["configuration"]["finish_variant"], json!("default"));
    assert_eq!(payload["variant_reset_from"], json!("v2"));
    assert_eq!(payload["roi_label"], json!("Excellent"));
}

#[tokio::test]
async fn update_defaults_configuration_when_omitted() {
    let request = json!({ "field": "storeys", "value": 1.5 });

    let (status, payload) = send(
        build_router(),
        post_json("/api/v1/configurator/update", &request),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["configuration"]["storeys"], json!(1.5));
    assert_eq!(payload["projection"]["nightly_rate"], json!(300));
    assert_eq!(payload["summary"]["storeys"], json!("1.5 (Mezzanine)"));
}

#[tokio::test]
async fn update_rejects_values_outside_the_enumeration() {
    let request = json!({ "field": "land_size", "value": 150 });

    let (status, payload) = send(
        build_router(),
        post_json("/api/v1/configurator/update", &request),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(payload["error"], json!("invalid land_size option '150'"));
}

#[tokio::test]
async fn update_rejects_unknown_fields() {
    let request = json!({ "field": "roof_colour", "value": "red" });

    let (status, payload) = send(
        build_router(),
        post_json("/api/v1/configurator/update", &request),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("roof_colour")));
}

#[tokio::test]
async fn matrix_enumerates_legal_configurations() {
    let (status, payload) = send(build_router(), get("/api/v1/configurator/matrix")).await;

    assert_eq!(status, StatusCode::OK);
    let rows = payload.as_array().expect("matrix rows");
    assert_eq!(rows.len(), VillaConfigurator::default().matrix().len());
    assert!(rows.iter().all(|row| !(row["build_style"] == json!("japanese")
        && row["finish_variant"] == json!("v2"))));
}
