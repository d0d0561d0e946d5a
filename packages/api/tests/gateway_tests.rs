mod common;

use api::{ApiError, LoginForm, Registered, Registration, TaskGateway, TaskPatch};
use common::{alice, setup, task_json};
use serde_json::json;
use store::{NewTask, TaskFields};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn new_task(title: &str) -> NewTask {
    let fields = TaskFields {
        title: title.into(),
        description: "d".into(),
        due_date: "2024-07-01".into(),
    }
    .validate()
    .unwrap();
    NewTask {
        fields,
        user_id: "u1".into(),
    }
}

#[tokio::test]
async fn test_login_then_fetch_carries_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "token": "t1", "user": { "_id": "u1", "username": "alice" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "todo": [task_json("t-1", "Write report", false)] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client
        .login(&LoginForm::new("a@b.com", "secret"))
        .await
        .unwrap();
    assert_eq!(session.token, "t1");
    assert_eq!(session.user.id, "u1");
    assert_eq!(session.user.username, "alice");

    let tasks = client.list_tasks(&session).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, "t-1");
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = client
        .login(&LoginForm::new("a@b.com", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_login_failure_without_body_uses_fallback() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client
        .login(&LoginForm::new("a@b.com", "secret"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to login. Please try again.");
}

#[tokio::test]
async fn test_invalid_login_form_sends_nothing() {
    let (server, client) = setup().await;

    let err = client.login(&LoginForm::new("", "secret")).await.unwrap_err();
    assert!(err.is_local());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_register_mismatch_sends_nothing() {
    let (server, client) = setup().await;

    let form = Registration {
        username: "alice".into(),
        email: "a@b.com".into(),
        password: "secret1".into(),
        confirm_password: "secret2".into(),
    };
    let err = client.register(&form).await.unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_created_user_requires_login() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "username": "alice",
            "email": "a@b.com",
            "password": "secret",
            "confirmPassword": "secret",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "u1", "username": "alice", "email": "a@b.com"
        })))
        .mount(&server)
        .await;

    let form = Registration {
        username: "alice".into(),
        email: "a@b.com".into(),
        password: "secret".into(),
        confirm_password: "secret".into(),
    };
    assert_eq!(
        client.register(&form).await.unwrap(),
        Registered::AccountCreated
    );
}

#[tokio::test]
async fn test_register_plain_text_success_requires_login() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_string("User registered successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let form = Registration {
        username: "alice".into(),
        email: "a@b.com".into(),
        password: "secret".into(),
        confirm_password: "secret".into(),
    };
    assert_eq!(
        client.register(&form).await.unwrap(),
        Registered::AccountCreated
    );
}

#[tokio::test]
async fn test_create_task_returns_server_copy() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/todo"))
        .and(header("authorization", "Bearer t1"))
        .and(body_json(json!({
            "title": "Buy milk",
            "description": "d",
            "dueDate": "2024-07-01",
            "userId": "u1",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "todo": task_json("srv-9", "Buy milk (server)", false) }
        })))
        .mount(&server)
        .await;

    let task = client
        .create_task(&alice(), &new_task("Buy milk"))
        .await
        .unwrap();
    assert_eq!(task.id, "srv-9");
    assert_eq!(task.title, "Buy milk (server)");
}

#[tokio::test]
async fn test_toggle_sends_only_completed() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/todo/t-1"))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "todo": task_json("t-1", "Write report", true) }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task = client
        .update_task(&alice(), "t-1", &TaskPatch::completed(true))
        .await
        .unwrap();
    assert!(task.completed);
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/todo/t-1"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_task(&alice(), "t-1").await.unwrap();
}

#[tokio::test]
async fn test_delete_failure_reads_error_field() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/todo/t-1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Todo not found" })))
        .mount(&server)
        .await;

    let err = client.delete_task(&alice(), "t-1").await.unwrap_err();
    assert_eq!(err.to_string(), "Todo not found");
}

#[tokio::test]
async fn test_unexpected_list_shape_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "todos": [] })))
        .mount(&server)
        .await;

    let err = client.list_tasks(&alice()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.to_string(), "Failed to load tasks. Please try again.");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1
    let base = url::Url::parse("http://127.0.0.1:1/api").unwrap();
    let client = api::ApiClient::with_client(reqwest::Client::new(), base);

    let err = client.list_tasks(&alice()).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.to_string(), "Failed to load tasks. Please try again.");
}
