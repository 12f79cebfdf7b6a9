// tests/http_api_test.rs — HttpDetectionApi against a fake detection server

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use visiondeck::api::{self, ApiCall, ApiReply, DetectionApi, HttpDetectionApi, UploadFile};
use visiondeck::infra::config::ServerConfig;
use visiondeck::infra::errors::DeckError;

#[derive(Default)]
struct Seen {
    uploads: Vec<(String, String, Vec<u8>)>,
}

type Shared = Arc<Mutex<Seen>>;

async fn upload(State(seen): State<Shared>, mut multipart: Multipart) -> Json<Value> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let mime = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap().to_vec();
        let ok = name.ends_with(".jpg");
        seen.lock().unwrap().uploads.push((name, mime, bytes));
        if !ok {
            return Json(json!({ "error": "Unsupported file type" }));
        }
        return Json(json!({
            "frame": "aGVsbG8=",
            "detections": [
                { "class": "person", "confidence": 0.91, "bbox": [1, 2, 3, 4] },
                { "class": "dog", "confidence": 0.67, "bbox": [5, 6, 7, 8] }
            ],
            "count": 2
        }));
    }
    Json(json!({ "error": "No file uploaded" }))
}

fn router(seen: Shared) -> Router {
    Router::new()
        .route("/start_webcam", post(|| async { Json(json!({ "status": "started" })) }))
        .route("/stop_webcam", post(|| async { Json(json!({ "status": "stopped" })) }))
        .route("/clear_logs", post(|| async { Json(json!({ "status": "cleared" })) }))
        .route("/upload_file", post(upload))
        .route(
            "/statistics",
            get(|| async {
                // Literal body: key order on the wire is part of the contract.
                (
                    [(header::CONTENT_TYPE, "application/json")],
                    r#"{"total_detections":7,"class_statistics":{"person":{"count":5,"avg_confidence":0.88},"car":{"count":2,"avg_confidence":0.71}},"session_duration":"0:03:12"}"#,
                )
            }),
        )
        .route(
            "/get_logs",
            get(|| async {
                Json(json!([
                    { "class": "car", "confidence": 0.71, "timestamp": "12:00:01" },
                    { "class": "person", "confidence": 0.9, "timestamp": "12:00:02" }
                ]))
            }),
        )
        .with_state(seen)
}

/// A server that answers with error statuses.
fn refusing_router() -> Router {
    Router::new()
        .route(
            "/upload_file",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "File too large" })),
                )
            }),
        )
        .route(
            "/start_webcam",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "error": "Camera unavailable" })),
                )
            }),
        )
        .route(
            "/stop_webcam",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        )
}

async fn serve() -> (HttpDetectionApi, Shared) {
    let seen = Shared::default();
    let api = serve_router(router(seen.clone())).await;
    (api, seen)
}

async fn serve_router(app: Router) -> HttpDetectionApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    HttpDetectionApi::new(&ServerConfig {
        base_url: format!("http://{addr}/"),
        request_timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_control_endpoints() {
    let (api, _) = serve().await;
    assert!(api.start_webcam().await.unwrap().is_running());
    assert!(api.stop_webcam().await.unwrap().is_stopped());
    assert!(api.clear_logs().await.unwrap().is_cleared());
}

#[tokio::test]
async fn test_statistics_keep_server_order() {
    let (api, _) = serve().await;
    let stats = api.statistics().await.unwrap();
    assert_eq!(stats.total_detections, Some(7));
    let dist = stats.class_statistics.unwrap();
    assert_eq!(dist.labels(), vec!["person".to_string(), "car".to_string()]);
    assert_eq!(dist.counts(), vec![5, 2]);
    assert_eq!(stats.session_duration.as_deref(), Some("0:03:12"));
}

#[tokio::test]
async fn test_upload_sends_multipart_file_field() {
    let (api, seen) = serve().await;
    let reply = api
        .upload_file(UploadFile {
            file_name: "street.jpg".into(),
            bytes: b"jpegbytes".to_vec(),
        })
        .await
        .unwrap();

    assert_eq!(reply.count, Some(2));
    assert_eq!(reply.detections.as_ref().map(Vec::len), Some(2));
    assert_eq!(reply.frame.unwrap().decode().unwrap(), b"hello");

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.uploads,
        vec![(
            "street.jpg".to_string(),
            "image/jpeg".to_string(),
            b"jpegbytes".to_vec()
        )]
    );
}

#[tokio::test]
async fn test_upload_error_payload_is_a_reply_not_a_failure() {
    let (api, _) = serve().await;
    let reply = api
        .upload_file(UploadFile {
            file_name: "scan.png".into(),
            bytes: vec![1, 2, 3],
        })
        .await
        .unwrap();
    assert!(reply.frame.is_none());
    assert_eq!(reply.error.as_deref(), Some("Unsupported file type"));
}

#[tokio::test]
async fn test_upload_error_payload_with_error_status_is_a_reply() {
    let api = serve_router(refusing_router()).await;
    let reply = api
        .upload_file(UploadFile {
            file_name: "huge.jpg".into(),
            bytes: vec![0; 16],
        })
        .await
        .unwrap();
    assert!(reply.frame.is_none());
    assert_eq!(reply.error.as_deref(), Some("File too large"));
}

#[tokio::test]
async fn test_control_error_payload_is_backend_error() {
    let api = serve_router(refusing_router()).await;
    let err = api.start_webcam().await.unwrap_err();
    assert!(matches!(&err, DeckError::Backend(m) if m == "Camera unavailable"));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_error_status_without_payload_is_transport_error() {
    let api = serve_router(refusing_router()).await;
    let err = api.stop_webcam().await.unwrap_err();
    assert!(matches!(err, DeckError::Status { status: 500, .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_refresh_fetches_stats_and_log() {
    let (api, _) = serve().await;
    let ApiReply::Refresh(Ok(snapshot)) = api::execute(&api, ApiCall::Refresh).await else {
        panic!("refresh failed");
    };
    assert_eq!(snapshot.stats.total_detections, Some(7));
    assert_eq!(snapshot.logs.len(), 2);
    assert_eq!(snapshot.logs[1].class, "person");
}

#[tokio::test]
async fn test_unknown_route_is_transport_error() {
    let (api, _) = serve().await;
    let bad = HttpDetectionApi::new(&ServerConfig {
        base_url: format!("{}/nowhere", api.base_url()),
        request_timeout_secs: 5,
    })
    .unwrap();
    let err = bad.start_webcam().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpDetectionApi::new(&ServerConfig {
        base_url: format!("http://{addr}"),
        request_timeout_secs: 2,
    })
    .unwrap();
    assert!(matches!(
        api.statistics().await,
        Err(DeckError::Transport { .. })
    ));
}
