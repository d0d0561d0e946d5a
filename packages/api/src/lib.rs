//! # API crate: client for the remote task service
//!
//! Everything the frontends need to talk to the task API over HTTP. The API
//! itself is owned by another service; this crate only shapes requests and
//! interprets responses.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login and signup forms, their local validation, and the registration outcome |
//! | [`client`] | [`ApiClient`] (reqwest) and the [`TaskGateway`] trait for the four task operations |
//! | [`error`] | [`ApiError`], whose `Display` is the user-facing message, and body message extraction |
//!
//! Requests are only sent once local checks pass: task bodies are built from
//! [`store::ValidTaskFields`], and the auth forms are validated inside
//! [`ApiClient::login`] / [`ApiClient::register`] before anything leaves the
//! client.

pub mod auth;
pub mod client;
pub mod error;

pub use auth::{LoginForm, Registered, Registration};
pub use client::{ApiClient, TaskGateway};
pub use error::{ApiError, Operation};

pub use store::{Session, Task, TaskPatch, User};
