//! Login API integration tests.
//!
//! Tests the HTTP authenticator against a stub `POST /login` endpoint.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use kaiwa_client::auth::HttpAuthenticator;
use kaiwa_core::auth::{AuthError, Authenticator};
use kaiwa_core::domain::Username;
use serde_json::{Value, json};

/// Stub login endpoint that replies with a fixed status and body and
/// remembers the last request body it saw.
struct LoginServer {
    base_url: String,
    captured: Arc<Mutex<Option<Value>>>,
}

impl LoginServer {
    async fn start(status: StatusCode, body: Value) -> Self {
        let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let captured_by_handler = captured.clone();
        let app = Router::new().route(
            "/login",
            post(move |Json(request): Json<Value>| async move {
                *captured_by_handler.lock().unwrap() = Some(request);
                (status, Json(body))
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    fn last_request(&self) -> Option<Value> {
        self.captured.lock().unwrap().clone()
    }
}

fn username(name: &str) -> Username {
    Username::new(name.to_string()).expect("Failed to build username")
}

#[tokio::test]
async fn test_login_success_returns_identity() {
    // テスト項目: ログイン成功でアイデンティティとトークンが得られる
    // given (前提条件):
    let server = LoginServer::start(StatusCode::OK, json!({ "otp": "123456" })).await;
    let authenticator = HttpAuthenticator::new(server.base_url.clone());

    // when (操作):
    let identity = authenticator
        .authenticate(&username("alice"), "password123")
        .await
        .expect("Login should succeed");

    // then (期待する結果):
    assert_eq!(identity.username().as_str(), "alice");
    assert_eq!(identity.token().as_str(), "123456");

    // リクエストボディに username と password が入っている
    let request = server.last_request().expect("Request should be captured");
    assert_eq!(
        request,
        json!({ "username": "alice", "password": "password123" })
    );
}

#[tokio::test]
async fn test_login_rejection_carries_status_code() {
    // テスト項目: 認証拒否はステータスコード付きの Rejected になる
    // given (前提条件):
    let server = LoginServer::start(
        StatusCode::UNAUTHORIZED,
        json!({ "error": "invalid credentials" }),
    )
    .await;
    let authenticator = HttpAuthenticator::new(server.base_url.clone());

    // when (操作):
    let result = authenticator.authenticate(&username("alice"), "wrong").await;

    // then (期待する結果):
    assert_eq!(result, Err(AuthError::Rejected { status: 401 }));
}

#[tokio::test]
async fn test_login_response_without_otp_is_malformed() {
    // テスト項目: otp を含まない 200 応答は MalformedResponse になる
    // given (前提条件):
    let server = LoginServer::start(StatusCode::OK, json!({ "message": "ok" })).await;
    let authenticator = HttpAuthenticator::new(server.base_url.clone());

    // when (操作):
    let result = authenticator.authenticate(&username("alice"), "pw").await;

    // then (期待する結果):
    assert!(matches!(result, Err(AuthError::MalformedResponse { .. })));
}

#[tokio::test]
async fn test_login_empty_otp_is_malformed() {
    // テスト項目: 空文字の otp は MalformedResponse になる
    // given (前提条件):
    let server = LoginServer::start(StatusCode::OK, json!({ "otp": "" })).await;
    let authenticator = HttpAuthenticator::new(server.base_url.clone());

    // when (操作):
    let result = authenticator.authenticate(&username("alice"), "pw").await;

    // then (期待する結果):
    assert!(matches!(result, Err(AuthError::MalformedResponse { .. })));
}

#[tokio::test]
async fn test_login_connection_failure_is_network_error() {
    // テスト項目: 接続できないサーバーへのログインは Network エラーになる
    // given (前提条件): ポートを確保してすぐ手放し、誰も聞いていない URL を作る
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    let authenticator = HttpAuthenticator::new(format!("http://{}", addr));

    // when (操作):
    let result = authenticator.authenticate(&username("alice"), "pw").await;

    // then (期待する結果):
    assert!(matches!(result, Err(AuthError::Network { .. })));
}
