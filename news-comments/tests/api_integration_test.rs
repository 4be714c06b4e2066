//! Integration tests for the HTTP API

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

use news_comments::api::{router, ApiServer, ApiServerConfig};
use news_comments::{AppConfig, Comments};

fn app() -> Router {
    router(Arc::new(Comments::in_memory(&AppConfig::default()).unwrap()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn payload(text: &str, news_id: i64) -> Value {
    json!({
        "text": text,
        "user": {"uuid": "6f1c2a8e-3d4b-4c5e-9f60-7a8b9c0d1e2f", "userName": "bob"},
        "newsId": news_id
    })
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cache"]["entries"], 0);
    assert_eq!(body["cache"]["hitRate"], 0.0);
}

#[tokio::test]
async fn test_create_update_archive_flow() {
    let app = app();

    let (status, created) = send(&app, "POST", "/comments", Some(payload("hi", 7))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["newsId"], 7);
    assert_eq!(created["user"]["userName"], "bob");
    assert!(created.get("archived").is_none());

    let (status, updated) = send(&app, "PUT", "/comments/1", Some(payload("bye", 7))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["text"], "bye");

    let (status, by_news) = send(&app, "GET", "/comments/1/news/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_news["text"], "bye");

    let (status, body) = send(&app, "PATCH", "/comments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, error) = send(&app, "GET", "/comments/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["errorCode"], 404);
    assert_eq!(error["errorMessage"], "Comment with id 1 is not found");

    let (status, archived) = send(&app, "GET", "/comments/archive/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(archived["text"], "bye");
}

#[tokio::test]
async fn test_validation_errors() {
    let app = app();

    let long = "x".repeat(501);
    let (status, error) = send(&app, "POST", "/comments", Some(payload(&long, 1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errorCode"], 400);

    let (status, _) = send(&app, "GET", "/comments?pageSize=0&numberPage=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_requests_get_json_errors() {
    let app = app();

    let (status, error) = send(&app, "GET", "/comments/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errorCode"], 400);

    let (status, error) = send(&app, "GET", "/comments?pageSize=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errorCode"], 400);

    let (status, error) = send(
        &app,
        "POST",
        "/comments",
        Some(json!({"text": "hi", "newsId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errorCode"], 400);
    assert!(error["errorMessage"].is_string());
}

#[tokio::test]
async fn test_oversized_search_window_is_rejected() {
    let app = app();
    send(&app, "POST", "/comments", Some(payload("budget talks", 1))).await;

    let (status, error) = send(
        &app,
        "GET",
        "/comments/search?search=budget&offset=0&limit=1099511627776",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errorCode"], 400);

    let uri = format!("/comments/search?search=budget&offset={}&limit=10", usize::MAX);
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The server is still serving
    let (status, results) = send(
        &app,
        "GET",
        "/comments/search?search=budget&offset=0&limit=10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_paging_and_news_archive() {
    let app = app();
    for i in 0..11 {
        let news_id = if i < 6 { 1 } else { 2 };
        send(&app, "POST", "/comments", Some(payload(&format!("c{}", i), news_id))).await;
    }

    let (status, page) = send(&app, "GET", "/comments?pageSize=5&numberPage=4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pageNumber"], 4);
    assert_eq!(page["countPage"], 3);
    assert_eq!(page["content"].as_array().unwrap().len(), 0);

    // Defaults: pageSize 15, numberPage 1
    let (_, page) = send(&app, "GET", "/comments", None).await;
    assert_eq!(page["pageNumber"], 1);
    assert_eq!(page["content"].as_array().unwrap().len(), 11);

    let (status, _) = send(&app, "PATCH", "/comments/news/2", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "PATCH", "/comments/news/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, active) = send(&app, "GET", "/comments/news/2", None).await;
    assert_eq!(active["content"].as_array().unwrap().len(), 0);

    let (_, archived) = send(&app, "GET", "/comments/archive/news/2?pageSize=2", None).await;
    assert_eq!(archived["countPage"], 3);
    assert_eq!(archived["content"].as_array().unwrap().len(), 2);

    let (_, all_archived) = send(&app, "GET", "/comments/archive", None).await;
    assert_eq!(all_archived["content"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_search_endpoint() {
    let app = app();
    send(&app, "POST", "/comments", Some(payload("inflation is rising", 1))).await;
    send(&app, "POST", "/comments", Some(payload("inflation worries", 2))).await;
    send(&app, "PATCH", "/comments/news/2", None).await;

    let (status, results) = send(
        &app,
        "GET",
        "/comments/search?search=inflation&offset=0&limit=10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["newsId"], 1);

    // All three parameters are required
    let (status, error) = send(&app, "GET", "/comments/search?search=inflation", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errorCode"], 400);
}

#[tokio::test]
async fn test_served_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let comments = Arc::new(Comments::in_memory(&AppConfig::default()).unwrap());
    let server = ApiServer::new(ApiServerConfig::default(), comments);
    let _server_handle = tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/comments", addr))
        .json(&payload("over the wire", 3))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let body: Value = client
        .get(format!("http://{}/comments/1", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["text"], "over the wire");
}
