//! # HTTP gateway to the task API
//!
//! [`ApiClient`] issues one request per user action and turns the response
//! into a model from the `store` crate or an [`ApiError`].
//!
//! ## Endpoints
//!
//! | Call | Request | Success body |
//! |------|---------|--------------|
//! | [`login`](ApiClient::login) | `POST /auth/login` | `{ data: { token, user } }` |
//! | [`register`](ApiClient::register) | `POST /auth/register` | created user, see [`crate::auth::Registered`] |
//! | [`list_tasks`](TaskGateway::list_tasks) | `GET /todo` | `{ data: { todo: [Task] } }` |
//! | [`create_task`](TaskGateway::create_task) | `POST /todo` | `{ data: { todo: Task } }` |
//! | [`update_task`](TaskGateway::update_task) | `PUT /todo/{id}` | `{ data: { todo: Task } }` |
//! | [`delete_task`](TaskGateway::delete_task) | `DELETE /todo/{id}` | empty |
//!
//! Paths are appended to the configured base URL, so a base of
//! `http://localhost:3000/api` yields `http://localhost:3000/api/todo`.
//! Task calls carry `Authorization: Bearer <token>` from the [`Session`] they
//! are given; the client itself holds no credentials.

use std::future::Future;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::config::ApiConfig;
use store::{NewTask, Session, Task, TaskPatch};
use url::Url;

use crate::auth::{self, LoginData, LoginForm, Registered, Registration};
use crate::error::{extract_message, ApiError, Operation};

/// The four task operations, behind a trait so views can be driven by a fake.
pub trait TaskGateway {
    fn list_tasks(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Vec<Task>, ApiError>>;
    fn create_task(
        &self,
        session: &Session,
        task: &NewTask,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn update_task(
        &self,
        session: &Session,
        id: &str,
        patch: &TaskPatch,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn delete_task(
        &self,
        session: &Session,
        id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TodoList {
    todo: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct TodoItem {
    todo: Task,
}

/// Client for the remote task API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config.base_url.clone())
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.request(method, self.endpoint(segments)?))
    }

    fn authorized(
        &self,
        method: Method,
        segments: &[&str],
        session: &Session,
    ) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .request(method, segments)?
            .header(reqwest::header::AUTHORIZATION, session.bearer()))
    }

    /// Send `request` and return the body of a 2xx response.
    async fn send(&self, op: Operation, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|source| {
            tracing::warn!("{:?} request failed: {}", op, source);
            ApiError::Transport { op, source }
        })?;
        read_body(op, response).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send(op, request).await?;
        decode(op, &body)
    }

    /// `POST /auth/login`. Returns the session to persist.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, ApiError> {
        form.validate()?;
        let op = Operation::Login;
        let request = self.request(Method::POST, &["auth", "login"])?.json(form);
        let envelope: Envelope<LoginData> = self.send_json(op, request).await?;
        tracing::info!("Signed in as {}", envelope.data.user.display_name());
        Ok(envelope.data.into_session())
    }

    /// `POST /auth/register`.
    pub async fn register(&self, form: &Registration) -> Result<Registered, ApiError> {
        form.validate()?;
        let op = Operation::Register;
        let request = self
            .request(Method::POST, &["auth", "register"])?
            .json(form);
        let body = self.send(op, request).await?;
        // Any 2xx means the account exists, even with an empty or plain-text body
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => Ok(auth::registered_from(&value)),
            Err(_) => {
                tracing::debug!("Registration answered without JSON; account created");
                Ok(Registered::AccountCreated)
            }
        }
    }
}

impl TaskGateway for ApiClient {
    async fn list_tasks(&self, session: &Session) -> Result<Vec<Task>, ApiError> {
        let request = self.authorized(Method::GET, &["todo"], session)?;
        let envelope: Envelope<TodoList> = self.send_json(Operation::ListTasks, request).await?;
        tracing::debug!("Loaded {} tasks", envelope.data.todo.len());
        Ok(envelope.data.todo)
    }

    async fn create_task(&self, session: &Session, task: &NewTask) -> Result<Task, ApiError> {
        let request = self
            .authorized(Method::POST, &["todo"], session)?
            .json(task);
        let envelope: Envelope<TodoItem> = self.send_json(Operation::CreateTask, request).await?;
        Ok(envelope.data.todo)
    }

    async fn update_task(
        &self,
        session: &Session,
        id: &str,
        patch: &TaskPatch,
    ) -> Result<Task, ApiError> {
        let request = self
            .authorized(Method::PUT, &["todo", id], session)?
            .json(patch);
        let envelope: Envelope<TodoItem> = self.send_json(Operation::UpdateTask, request).await?;
        Ok(envelope.data.todo)
    }

    async fn delete_task(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        let request = self.authorized(Method::DELETE, &["todo", id], session)?;
        self.send(Operation::DeleteTask, request).await?;
        Ok(())
    }
}

async fn read_body(op: Operation, response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Transport { op, source })?;
    if !status.is_success() {
        let message = extract_message(&body);
        tracing::warn!(
            "{:?} rejected with {}: {}",
            op,
            status,
            message.as_deref().unwrap_or("<no message>")
        );
        return Err(ApiError::rejected(op, status.as_u16(), message));
    }
    Ok(body)
}

fn decode<T: DeserializeOwned>(op: Operation, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("{:?} response did not match the expected shape: {}", op, e);
        ApiError::Decode {
            op,
            detail: e.to_string(),
        }
    })
}
