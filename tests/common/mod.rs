// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers: an in-process mock of the platform API.

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use microtask_session::client::RecordingNavigator;
use microtask_session::{ApiClient, CredentialStore};
use reqwest::Url;
use serde_json::{json, Value};
use std::sync::Arc;

/// Token the mock API accepts for user routes.
#[allow(dead_code)]
pub const USER_TOKEN: &str = "good";
/// Token the mock API accepts for admin routes.
#[allow(dead_code)]
pub const ADMIN_TOKEN: &str = "admin-good";
#[allow(dead_code)]
pub const PASSWORD: &str = "secret";
#[allow(dead_code)]
pub const VERIFY_CODE: &str = "123456";

type Reply = (StatusCode, Json<Value>);

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

fn require_bearer(headers: &HeaderMap, token: &str, body: Value) -> Reply {
    if authorization(headers) == Some(format!("Bearer {token}").as_str()) {
        (StatusCode::OK, Json(body))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthenticated." })),
        )
    }
}

async fn payments(headers: HeaderMap) -> Reply {
    require_bearer(
        &headers,
        USER_TOKEN,
        json!([{ "id": 1, "amount": "5.00", "status": "approved" }]),
    )
}

async fn admin_payments(headers: HeaderMap) -> Reply {
    require_bearer(
        &headers,
        ADMIN_TOKEN,
        json!([{ "id": 9, "amount": "20.00", "status": "pending" }]),
    )
}

/// Echo the Authorization header back exactly as received.
async fn echo(headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "present": headers.contains_key(header::AUTHORIZATION),
        "authorization": authorization(&headers),
    }))
}

/// Always 401, whoever asks.
async fn notices() -> Reply {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Unauthenticated." })),
    )
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["password"] == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "token": USER_TOKEN,
                "user": { "id": 1, "name": "A", "email": body["email"], "balance": "0.00" },
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
    }
}

async fn admin_login(Json(body): Json<Value>) -> Reply {
    if body["password"] == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "token": ADMIN_TOKEN,
                "admin": { "id": 100, "name": "Root", "role": "super_admin" },
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
    }
}

async fn verify_email(Json(body): Json<Value>) -> Reply {
    if body["code"] == VERIFY_CODE {
        (
            StatusCode::OK,
            Json(json!({
                "token": USER_TOKEN,
                "user": { "uuid": "b3c1", "name": "New", "email": body["email"] },
            })),
        )
    } else {
        // Verified, but the server did not log the user in.
        (StatusCode::OK, Json(json!({ "message": "Email verified" })))
    }
}

async fn register() -> Reply {
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Verification code sent" })),
    )
}

/// Start the mock API on an ephemeral port and return its base URL.
pub async fn spawn_mock_api() -> Url {
    let app = Router::new()
        .route("/api/v1/payments", get(payments))
        .route("/api/v1/admin/payments", get(admin_payments))
        .route("/api/v1/echo", get(echo))
        .route("/api/v1/admin/echo", get(echo))
        .route("/api/v1/public/notices", get(notices))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/verify-email", post(verify_email))
        .route("/api/v1/admin/login", post(admin_login));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("Mock API has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock API crashed");
    });

    Url::parse(&format!("http://{addr}/api/v1")).expect("Mock API URL is valid")
}

/// Create a client against the mock API with an in-memory store.
#[allow(dead_code)]
pub async fn test_client() -> (ApiClient, Arc<RecordingNavigator>) {
    let base_url = spawn_mock_api().await;
    client_for(base_url)
}

/// Create a client for an arbitrary base URL with an in-memory store.
#[allow(dead_code)]
pub fn client_for(base_url: Url) -> (ApiClient, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let client = ApiClient::with_navigator(base_url, CredentialStore::in_memory(), navigator.clone());
    (client, navigator)
}
