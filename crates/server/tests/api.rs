//! End-to-end API tests driving the router directly.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn make_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let state = Arc::new(ServerState::new(config).unwrap());
    (build_router(state), dir)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn weapon_frame(ts: &str) -> Value {
    json!({
        "camera_id": "cam1",
        "timestamp": ts,
        "detections": [
            {"class_name": "person", "confidence": 0.95},
            {"class_name": "knife", "confidence": 0.9}
        ]
    })
}

#[tokio::test]
async fn api_info_lists_endpoints() {
    let (app, _dir) = make_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Doorwatch Server");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .contains(&json!("/frame_result")));
}

#[tokio::test]
async fn health_and_ready_respond() {
    let (app, _dir) = make_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"]["events_dir"], "ready");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _dir) = make_app();
    let (status, body) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn empty_frame_reports_idle() {
    let (app, _dir) = make_app();
    let (status, body) = post_json(&app, "/frame_result", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_state"], "idle");
    assert_eq!(body["danger"], false);

    let (_, events) = get(&app, "/events").await;
    assert_eq!(events.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn malformed_timestamp_is_tolerated() {
    let (app, _dir) = make_app();
    let frame = json!({
        "camera_id": "cam1",
        "timestamp": "not-a-timestamp",
        "detections": [{"class_name": "person", "confidence": 0.9}]
    });
    let (status, body) = post_json(&app, "/frame_result", frame).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_state"], "idle");
}

#[tokio::test]
async fn sustained_weapon_raises_danger_event() {
    let (app, _dir) = make_app();

    let (_, body) = post_json(&app, "/frame_result", weapon_frame("2025-03-01T09:00:00Z")).await;
    assert_eq!(body["current_state"], "event_active");

    let (_, body) = post_json(&app, "/frame_result", weapon_frame("2025-03-01T09:00:01Z")).await;
    assert_eq!(body["current_state"], "event_active");

    let (_, body) = post_json(&app, "/frame_result", weapon_frame("2025-03-01T09:00:03Z")).await;
    assert_eq!(body["current_state"], "threat_active");
    assert_eq!(body["danger"], true);
    assert_eq!(body["last_event_type"], "threat");

    let (_, events) = get(&app, "/events").await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event_id"], 1);
    assert_eq!(events[0]["event_type"], "threat");
    assert_eq!(events[0]["severity"], "danger");
    assert!(events[0]["caption"].as_str().unwrap().ends_with("DANGER."));

    // Polling reflects the same status
    let (_, body) = get(&app, "/latest_status").await;
    assert_eq!(body["danger"], true);
}

#[tokio::test]
async fn visitor_event_finalizes_after_cooldown() {
    let (app, _dir) = make_app();

    let visit = json!({
        "camera_id": "cam1",
        "timestamp": "2025-03-01T10:00:00Z",
        "detections": [{"class_name": "person", "confidence": 0.98}],
        "person_info": {"type": "friend", "name": "Alice"}
    });
    let (_, body) = post_json(&app, "/frame_result", visit).await;
    assert_eq!(body["current_state"], "idle");

    let empty = |ts: &str| json!({"camera_id": "cam1", "timestamp": ts});
    post_json(&app, "/frame_result", empty("2025-03-01T10:00:05Z")).await;
    let (_, body) = post_json(&app, "/frame_result", empty("2025-03-01T10:00:08Z")).await;
    assert_eq!(
        body["last_event_caption"],
        "Your friend Alice is standing at your door."
    );
    assert_eq!(body["last_event_severity"], "normal");

    let (_, events) = get(&app, "/events").await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event_type"], "visitor");
    assert_eq!(events[0]["person_info"][0]["name"], "Alice");
}

#[tokio::test]
async fn ack_alert_clears_flags() {
    let (app, _dir) = make_app();
    post_json(&app, "/frame_result", weapon_frame("2025-03-01T09:00:00Z")).await;
    post_json(&app, "/frame_result", weapon_frame("2025-03-01T09:00:03Z")).await;

    let (status, body) = post_json(&app, "/ack_alert", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (_, body) = get(&app, "/latest_status").await;
    assert_eq!(body["danger"], false);
    assert_eq!(body["needs_attention"], false);
    // Last-event fields survive acknowledgement
    assert_eq!(body["last_event_id"], 1);
}

#[tokio::test]
async fn events_limit_is_honored() {
    let (app, _dir) = make_app();

    // Three visitor episodes, well separated
    for (i, base) in ["09:00", "09:10", "09:20"].iter().enumerate() {
        let visit = json!({
            "camera_id": "cam1",
            "timestamp": format!("2025-03-01T{base}:00Z"),
            "detections": [{"class_name": "person", "confidence": 0.9}],
            "person_info": {"type": "friend", "name": format!("Guest{i}")}
        });
        post_json(&app, "/frame_result", visit).await;
        let empty = json!({"camera_id": "cam1", "timestamp": format!("2025-03-01T{base}:05Z")});
        post_json(&app, "/frame_result", empty).await;
        let empty = json!({"camera_id": "cam1", "timestamp": format!("2025-03-01T{base}:08Z")});
        post_json(&app, "/frame_result", empty).await;
    }

    let (_, events) = get(&app, "/events").await;
    assert_eq!(events.as_array().unwrap().len(), 3);

    let (_, events) = get(&app, "/events?limit=2").await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 2);
    // Newest kept, oldest first
    assert_eq!(events[0]["event_id"], 2);
    assert_eq!(events[1]["event_id"], 3);
}

#[tokio::test]
async fn snapshot_is_stored_and_served() {
    let (app, _dir) = make_app();

    let mut frame = weapon_frame("2025-03-01T09:00:00Z");
    frame["image_jpeg_base64"] = json!(BASE64.encode(b"not-a-real-jpeg"));
    post_json(&app, "/frame_result", frame).await;

    let mut frame = weapon_frame("2025-03-01T09:00:03Z");
    frame["image_jpeg_base64"] = json!(BASE64.encode(b"not-a-real-jpeg"));
    post_json(&app, "/frame_result", frame).await;

    let (_, events) = get(&app, "/events").await;
    let url = events[0]["snapshot_url"].as_str().unwrap().to_string();
    assert_eq!(url, "/events/img/event_1.jpg");

    let response = app
        .clone()
        .oneshot(Request::builder().uri(&url).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"not-a-real-jpeg");
}

#[tokio::test]
async fn danger_list_add_remove_and_validation() {
    let (app, dir) = make_app();

    let (_, body) = get(&app, "/danger_list").await;
    assert_eq!(body["dangerous_persons"], json!([]));

    let (status, body) =
        post_json(&app, "/danger_list", json!({"action": "add", "name": " Mallory "})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dangerous_persons"], json!(["mallory"]));

    // Persisted alongside the rest of the data dir
    let raw = std::fs::read_to_string(dir.path().join("danger_list.json")).unwrap();
    let names: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(names, vec!["mallory"]);

    let (status, body) =
        post_json(&app, "/danger_list", json!({"action": "remove", "name": "MALLORY"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dangerous_persons"], json!([]));

    let (status, body) = post_json(&app, "/danger_list", json!({"action": "add"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, _) =
        post_json(&app, "/danger_list", json!({"action": "promote", "name": "eve"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blacklisted_friend_with_weapon_is_danger() {
    let (app, _dir) = make_app();
    post_json(&app, "/danger_list", json!({"action": "add", "name": "bob"})).await;

    let frame = |ts: &str| {
        json!({
            "camera_id": "cam1",
            "timestamp": ts,
            "detections": [
                {"class_name": "person", "confidence": 0.95},
                {"class_name": "hammer", "confidence": 0.8}
            ],
            "person_info": {"type": "friend", "name": "Bob"}
        })
    };
    post_json(&app, "/frame_result", frame("2025-03-01T09:00:00Z")).await;
    post_json(&app, "/frame_result", frame("2025-03-01T09:00:03Z")).await;

    let (_, events) = get(&app, "/events").await;
    assert_eq!(events[0]["severity"], "danger");
    assert_eq!(
        events[0]["caption"],
        "Your friend Bob has been marked as dangerous and is holding a weapon. DANGER."
    );
}
