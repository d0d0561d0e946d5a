//! Common test utilities for the api crate

use api::ApiClient;
use store::{Session, User};
use url::Url;
use wiremock::MockServer;

/// Start a mock task API and a client pointed at its `/api` prefix.
pub async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base);
    (server, client)
}

pub fn alice() -> Session {
    Session::new(
        User {
            id: "u1".into(),
            username: "alice".into(),
            email: "a@b.com".into(),
        },
        "t1",
    )
}

pub fn task_json(id: &str, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": title,
        "description": format!("{title} details"),
        "dueDate": "2024-07-01T00:00:00.000Z",
        "completed": completed,
        "userId": "u1",
    })
}
