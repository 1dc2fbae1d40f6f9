mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{Method, Request, StatusCode};
use axum::Router;
use hyper::Body;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{studio, FakeImageModel, FakeTextModel, Reply, GENERATED, PHOTO};
use kritrim::api::routes::{router, AppState};

fn app(image: FakeImageModel, text: FakeTextModel) -> Router {
    router(Arc::new(AppState { studio: studio(Arc::new(image), Arc::new(text)) }))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn settled_jobs(app: &Router) -> Value {
    for _ in 0..100 {
        let (_, snapshot) = call(app, Method::GET, "/jobs", None).await;
        let pending = snapshot["jobs"].as_object().map(|jobs| jobs.values().any(|j| j["status"] == "pending"));
        if pending == Some(false) {
            return snapshot;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("jobs never settled");
}

#[tokio::test]
async fn catalog_lists_eras_cultural_looks_and_filters() {
    let app = app(FakeImageModel::new(), FakeTextModel::replying("x"));
    let (status, body) = call(&app, Method::GET, "/catalog", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eras"][0]["name"], "Ancient & Mythological");
    let ghana = body["cultural"]
        .as_array()
        .and_then(|countries| countries.iter().find(|c| c["name"] == "Ghana"))
        .cloned();
    assert_eq!(ghana.map(|c| c["regions"].clone()), Some(json!(["Kente cloth", "Adinkra cloth smock"])));
    assert_eq!(body["filters"].as_array().map(Vec::len), Some(13));
}

#[tokio::test]
async fn generate_before_upload_is_bad_request() {
    let app = app(FakeImageModel::new(), FakeTextModel::replying("x"));
    let (status, body) = call(&app, Method::POST, "/generate", Some(json!({"mode": "quick", "eras": ["Viking Warrior"]}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No source image uploaded");
}

#[tokio::test]
async fn quick_trip_round_trip_and_regenerate() {
    let app = app(
        FakeImageModel::new().on("Viking Warrior", vec![Reply::Fail("Status: 400, Body: nope")]),
        FakeTextModel::replying("x"),
    );

    let (status, _) = call(&app, Method::POST, "/upload", Some(json!({ "image": PHOTO }))).await;
    assert_eq!(status, StatusCode::OK);

    let selection = json!({"mode": "quick", "eras": ["Viking Warrior", "Cyberpunk Hacker", "Ghibli"]});
    let (status, body) = call(&app, Method::POST, "/generate", Some(selection)).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["jobs"].as_object().map(|j| j.len()), Some(3));

    let snapshot = settled_jobs(&app).await;
    assert_eq!(snapshot["jobs"]["Viking Warrior"]["status"], "error");
    assert_eq!(snapshot["jobs"]["Ghibli"]["status"], "done");
    assert_eq!(snapshot["jobs"]["Ghibli"]["image"], GENERATED);

    let (status, job) = call(&app, Method::POST, "/jobs/Viking%20Warrior/regenerate", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(job["status"], "pending");
    assert_eq!(job["prompt"], snapshot["jobs"]["Viking Warrior"]["prompt"]);

    let snapshot = settled_jobs(&app).await;
    assert_eq!(snapshot["jobs"]["Viking Warrior"]["status"], "done");

    let (_, album) = call(&app, Method::GET, "/album", None).await;
    assert_eq!(album.as_object().map(|a| a.len()), Some(3));
}

#[tokio::test]
async fn regenerate_unknown_job_is_not_found() {
    let app = app(FakeImageModel::new(), FakeTextModel::replying("x"));
    call(&app, Method::POST, "/upload", Some(json!({ "image": PHOTO }))).await;
    let (status, _) = call(&app, Method::POST, "/jobs/Pirate/regenerate", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preview_reports_missing_selection() {
    let app = app(FakeImageModel::new(), FakeTextModel::replying("x"));
    let (status, body) = call(&app, Method::POST, "/preview", Some(json!({"mode": "filter"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing selection: filter");

    let (status, body) = call(&app, Method::POST, "/preview", Some(json!({"mode": "filter", "name": "Sepia Tone"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["key"], "Sepia Tone");
}

#[tokio::test]
async fn suggestions() {
    let app = app(FakeImageModel::new(), FakeTextModel::replying(" a glass labyrinth "));
    let (status, body) = call(&app, Method::POST, "/suggest/scenery", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"field": "scenery", "suggestion": "a glass labyrinth"}));

    let (status, _) = call(&app, Method::POST, "/suggest/mood", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let empty = app_with_text(FakeTextModel::replying("  "));
    let (status, body) = call(&empty, Method::POST, "/suggest/pose", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Received an empty suggestion from the API.");
}

fn app_with_text(text: FakeTextModel) -> Router {
    app(FakeImageModel::new(), text)
}

#[tokio::test]
async fn reset_clears_jobs() {
    let app = app(FakeImageModel::new(), FakeTextModel::replying("x"));
    call(&app, Method::POST, "/upload", Some(json!({ "image": PHOTO }))).await;
    call(&app, Method::POST, "/generate", Some(json!({"mode": "filter", "name": "Cyanotype"}))).await;
    settled_jobs(&app).await;

    let (status, _) = call(&app, Method::POST, "/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, snapshot) = call(&app, Method::GET, "/jobs", None).await;
    assert_eq!(snapshot["jobs"], json!({}));
}
