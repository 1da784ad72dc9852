// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::{json, Value};
use verification_reminder::Auth0Client;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_CLIENT_ID: &str = "test_client_id";
pub const TEST_CLIENT_SECRET: &str = "test_secret";
pub const TEST_TOKEN: &str = "mock_management_token";

pub const TOKEN_PATH: &str = "/oauth/token";
pub const USERS_PATH: &str = "/api/v2/users";
pub const VERIFICATION_PATH: &str = "/api/v2/jobs/verification-email";

/// Create a client pointed at the mock tenant.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> Auth0Client {
    Auth0Client::with_base_url(
        server.uri(),
        TEST_CLIENT_ID.to_string(),
        TEST_CLIENT_SECRET.to_string(),
    )
}

/// Audience the client will request for the mock tenant.
#[allow(dead_code)]
pub fn test_audience(server: &MockServer) -> String {
    format!("{}/api/v2/", server.uri())
}

/// Mount a successful client-credentials exchange.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "Bearer",
            "expires_in": 86400,
            "scope": "read:users update:users"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a user search returning `users`.
#[allow(dead_code)]
pub async fn mount_users(server: &MockServer, users: Value) {
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a successful verification-email job for one user.
#[allow(dead_code)]
pub async fn mount_verification(server: &MockServer, user_id: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(VERIFICATION_PATH))
        .and(body_json(json!({ "user_id": user_id })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "pending",
            "type": "verification_email",
            "created_at": "2024-05-02T08:15:01.000Z",
            "id": format!("job_{}", user_id.replace('|', "_"))
        })))
        .expect(times)
        .mount(server)
        .await;
}

/// User ids sent to the verification endpoint, in request order.
#[allow(dead_code)]
pub async fn dispatched_user_ids(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|req| req.url.path() == VERIFICATION_PATH)
        .map(|req| {
            let body: Value = serde_json::from_slice(&req.body).expect("JSON body");
            body["user_id"].as_str().expect("user_id").to_string()
        })
        .collect()
}
