//! # Domain models for tasks and sessions
//!
//! Defines the data structures that cross the boundary between the remote task
//! API and the client. Everything here is `Serialize + Deserialize` so the same
//! types are used for request bodies, response envelopes and browser storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Task`] | A task as the API returns it. `id` is assigned by the server and never changes. |
//! | [`TaskFields`] | The three editable fields of a task. Used both for the add-form draft and the edit buffer. |
//! | [`TaskPatch`] | A partial update: either all editable fields or the `completed` flag alone. |
//! | [`User`] | The identity part of a session, stored under the `user` key. |
//! | [`Session`] | `User` plus the bearer token. |
//!
//! ## Wire format quirks
//!
//! - Ids are accepted as `id` or `_id` and always written as `id`.
//! - Due dates are accepted as `YYYY-MM-DD` or as an RFC 3339 timestamp
//!   (only the date part is kept) and always written as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A task owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "due_date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// The editable part of this task, used to seed the edit buffer.
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.format(due_date::FORMAT).to_string(),
        }
    }

    /// Incomplete and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

/// Editable task fields as typed into a form.
///
/// `due_date` stays a string here because it is bound to an `<input type="date">`
/// and may be empty until the user picks a value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl TaskFields {
    /// Check that every field is filled in and the date parses.
    ///
    /// Returns the trimmed title/description and the parsed date.
    pub fn validate(&self) -> Result<ValidTaskFields, FieldError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FieldError::Missing("Title"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FieldError::Missing("Description"));
        }
        let raw_date = self.due_date.trim();
        if raw_date.is_empty() {
            return Err(FieldError::Missing("Due date"));
        }
        let due_date = due_date::parse(raw_date).ok_or(FieldError::InvalidDate)?;
        Ok(ValidTaskFields {
            title: title.to_string(),
            description: description.to_string(),
            due_date,
        })
    }
}

/// Task fields that passed [`TaskFields::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidTaskFields {
    pub title: String,
    pub description: String,
    #[serde(with = "due_date")]
    pub due_date: NaiveDate,
}

/// Why a task form was rejected before any request was sent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Due date must be a valid date")]
    InvalidDate,
}

/// Body of `POST /todo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(flatten)]
    pub fields: ValidTaskFields,
    pub user_id: String,
}

/// Body of `PUT /todo/{id}`. Unset fields are omitted from the JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "due_date::serialize_opt"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Replace all editable fields at once.
    pub fn fields(fields: ValidTaskFields) -> Self {
        Self {
            title: Some(fields.title),
            description: Some(fields.description),
            due_date: Some(fields.due_date),
            completed: None,
        }
    }

    /// Set only the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

/// Identity of the signed-in user, as persisted under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Username, falling back to email when the API sent none.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// The authenticated identity and bearer credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Serde helpers for calendar dates that may arrive as full timestamps.
pub mod due_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    /// Parse `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp.
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let date_part = match raw.split_once('T') {
            Some((date, _time)) => date,
            None => raw,
        };
        NaiveDate::parse_from_str(date_part, FORMAT).ok()
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn serialize_opt<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid due date: {raw}")))
    }
}
