mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

// End-to-end tests against a real Postgres instance. Run them with
// `cargo test -- --ignored` once a server is reachable via DATABASE_URL.

async fn create_todo(app: &TestApp, token: &str, title: &str) -> String {
    let response = app
        .post_authenticated("/todo", token)
        .json(&json!({
            "title": title,
            "description": "this is a test todo item.",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("Missing todo id").to_string()
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_create_todo_success() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .post_authenticated("/todo", &token)
        .json(&json!({
            "title": "test todo",
            "description": "this is a test todo item.",
            "state": "pending"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "test todo");
    assert_eq!(body["description"], "this is a test todo item.");
    assert_eq!(body["state"], "pending");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_create_todo_defaults_to_pending() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .post_authenticated("/todo", &token)
        .json(&json!({ "title": "no state given" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["state"], "pending");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_list_todos_scoped_to_owner() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    app.register_user("bob", "bob@example.com", "pw2").await;
    let alice_token = app.login("alice", "pw1").await;
    let bob_token = app.login("bob", "pw2").await;

    for i in 0..3 {
        create_todo(&app, &alice_token, &format!("alice todo {}", i)).await;
    }
    create_todo(&app, &bob_token, "bob todo").await;

    let response = app
        .get_authenticated("/todo", &alice_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 3);
    assert!(todos
        .iter()
        .all(|t| t["title"].as_str().unwrap().starts_with("alice")));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_list_todos_title_filter() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    for _ in 0..5 {
        create_todo(&app, &token, "Buy groceries").await;
    }
    for _ in 0..3 {
        create_todo(&app, &token, "Give gifts").await;
    }

    let response = app
        .get_authenticated("/todo?title=Buy", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["todos"].as_array().unwrap().len(), 5);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_list_todos_state_filter_and_pagination() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    for i in 0..5 {
        let id = create_todo(&app, &token, &format!("todo {}", i)).await;
        if i < 2 {
            let response = app
                .patch_authenticated(&format!("/todo/{}", id), &token)
                .json(&json!({ "state": "doing" }))
                .send()
                .await
                .expect("Failed to execute request");
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    let response = app
        .get_authenticated("/todo?state=doing", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["todos"].as_array().unwrap().len(), 2);

    let response = app
        .get_authenticated("/todo?skip=1&limit=2", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["todos"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_patch_todo_updates_only_present_fields() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let id = create_todo(&app, &token, "original title").await;

    let response = app
        .patch_authenticated(&format!("/todo/{}", id), &token)
        .json(&json!({ "state": "doing" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "original title");
    assert_eq!(body["description"], "this is a test todo item.");
    assert_eq!(body["state"], "doing");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_patch_todo_not_found() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .patch_authenticated(&format!("/todo/{}", uuid::Uuid::new_v4()), &token)
        .json(&json!({ "state": "doing" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Todo not found");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_patch_todo_not_owner() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    app.register_user("mallory", "mallory@example.com", "pw2")
        .await;
    let alice_token = app.login("alice", "pw1").await;
    let mallory_token = app.login("mallory", "pw2").await;

    let id = create_todo(&app, &alice_token, "alice todo").await;

    let response = app
        .patch_authenticated(&format!("/todo/{}", id), &mallory_token)
        .json(&json!({ "title": "hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Not enough permissions");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_delete_todo_success() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let id = create_todo(&app, &token, "to be deleted").await;

    let response = app
        .delete_authenticated(&format!("/todo/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Todo deleted successfully");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_delete_todo_not_found() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .delete_authenticated(&format!("/todo/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Todo not found");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_delete_todo_not_owner() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "alice@example.com", "pw1").await;
    app.register_user("mallory", "mallory@example.com", "pw2")
        .await;
    let alice_token = app.login("alice", "pw1").await;
    let mallory_token = app.login("mallory", "pw2").await;

    let id = create_todo(&app, &alice_token, "alice todo").await;

    let response = app
        .delete_authenticated(&format!("/todo/{}", id), &mallory_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_deleting_user_cascades_todos() {
    let app = TestApp::spawn().await;

    let user_id = app.register_user("alice", "alice@example.com", "pw1").await;
    let token = app.login("alice", "pw1").await;

    create_todo(&app, &token, "orphan candidate").await;

    let response = app
        .delete_authenticated(&format!("/users/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // The owner's rows are gone with the account
    let pool = &app.db.as_ref().unwrap().pool;
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await
        .expect("Failed to count todos");
    assert_eq!(remaining, 0);
}
