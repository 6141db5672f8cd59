use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use chat_shell::server::router;
use chat_shell::{ChatRecord, Client, StaticRetriever};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

fn shell_with(retriever: StaticRetriever) -> TestServer {
    TestServer::new(router(Arc::new(retriever), "Chats")).unwrap()
}

#[tokio::test]
async fn test_index_renders_chats_in_order() {
    let server = shell_with(StaticRetriever::chats(vec![
        ChatRecord(json!({"id": 1, "title": "first"})),
        ChatRecord(json!({"id": 2, "title": "second"})),
    ]));

    let response = server.get("/").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Chats</title>"));
    let first = page.find("first").unwrap();
    let second = page.find("second").unwrap();
    assert!(first < second);
    assert!(page.contains(r#"<textarea"#));
}

#[tokio::test]
async fn test_index_renders_failure_notice() {
    let server = shell_with(StaticRetriever::failure(500, "backend down"));

    let response = server.get("/").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains(r#"role="alert""#));
    assert!(page.contains("backend down"));
}

#[tokio::test]
async fn test_api_chats_passthrough() {
    let server = shell_with(StaticRetriever::chats(vec![ChatRecord(json!({"id": 3}))]));

    let response = server.get("/api/chats").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([{"id": 3}]));
}

#[tokio::test]
async fn test_api_chats_failure_is_bad_gateway() {
    let server = shell_with(StaticRetriever::failure(500, "nope"));

    let response = server.get("/api/chats").await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("API error (500): nope"));
}

#[tokio::test]
async fn test_each_page_load_fetches_once_from_backend() {
    let hits = Arc::new(AtomicUsize::new(0));
    let backend_hits = Arc::clone(&hits);
    let backend = Router::new().route(
        "/health",
        get(move || {
            let hits = Arc::clone(&backend_hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                axum::Json(json!([{"id": "a"}]))
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });

    let client = Client::new(format!("http://{addr}/health")).unwrap();
    let server = TestServer::new(router(Arc::new(client), "Chats")).unwrap();

    server.get("/").await.assert_status_ok();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let page = server.get("/").await.text();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert!(page.contains("{&quot;id&quot;:&quot;a&quot;}"));
}
