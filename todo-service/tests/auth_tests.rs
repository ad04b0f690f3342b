mod common;

use auth::AccessClaims;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;

// These tests exercise the identity-resolution path up to (and including)
// the storage lookup; none of them requires a reachable database because
// every request is rejected with the same uniform 401 beforehand or by the
// fail-closed lookup.

const CREDENTIALS_DETAIL: &str = "Could not validate credentials";

/// Flip one character in the signature segment of a JWT.
fn tamper_signature(token: &str) -> String {
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    let mut signature: Vec<char> = parts[2].chars().collect();
    signature[0] = if signature[0] == 'A' { 'B' } else { 'A' };
    parts[2] = signature.into_iter().collect();
    parts.join(".")
}

async fn assert_credentials_rejection(response: reqwest::Response) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], CREDENTIALS_DETAIL);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .post("/auth/refresh-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_protected_route_with_non_bearer_scheme() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .post("/auth/refresh-token")
        .header("Authorization", "Basic YWxpY2U6cHcx")
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_protected_route_with_malformed_token() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .delete_authenticated("/todo/some-id", "not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_protected_route_with_tampered_signature() {
    let app = TestApp::spawn_without_db().await;

    let claims = AccessClaims::for_subject("alice", Utc::now());
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");
    let tampered = tamper_signature(&token);

    let response = app
        .post_authenticated("/auth/refresh-token", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn_without_db().await;

    // Issued far enough in the past that the 30-minute window has closed
    let issued = Utc::now() - Duration::minutes(61);
    let claims = AccessClaims::for_subject("alice", issued);
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .post_authenticated("/auth/refresh-token", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_token_without_subject_is_rejected() {
    let app = TestApp::spawn_without_db().await;

    let exp = (Utc::now() + Duration::minutes(30)).timestamp();
    let claims = AccessClaims::new().with_expiration(exp);
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .post_authenticated("/auth/refresh-token", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_token_with_empty_subject_is_rejected() {
    let app = TestApp::spawn_without_db().await;

    let exp = (Utc::now() + Duration::minutes(30)).timestamp();
    let claims = AccessClaims::new().with_subject("").with_expiration(exp);
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .post_authenticated("/auth/refresh-token", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_valid_token_with_unresolvable_subject_is_rejected() {
    let app = TestApp::spawn_without_db().await;

    // Structurally valid and correctly signed; resolution fails closed at
    // the storage lookup and reports the same uniform body
    let claims = AccessClaims::for_subject("ghost", Utc::now());
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .post_authenticated("/auth/refresh-token", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_credentials_rejection(response).await;
}

#[tokio::test]
async fn test_rejection_carries_www_authenticate_header() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .post("/auth/refresh-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
}
