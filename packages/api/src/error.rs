//! # Gateway errors
//!
//! [`ApiError`] is what every gateway call returns on failure. Its `Display`
//! output is the message the user sees, so each variant renders something a
//! person can act on:
//!
//! | Variant | Raised when | Message |
//! |---------|-------------|---------|
//! | `Invalid` | a form fails a local check; no request is sent | the check's own message |
//! | `NotSignedIn` | a task call is attempted without a session; no request is sent | fixed |
//! | `Rejected` | the API answered with a non-2xx status | body `message`/`error`, else the per-operation fallback |
//! | `Transport` | the request never got an answer | per-operation fallback |
//! | `Decode` | a 2xx body did not have the expected shape | per-operation fallback |
//! | `Config` | the base URL cannot carry a path | description of the problem |

use thiserror::Error;

/// The gateway call an error belongs to. Picks the fallback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    ListTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

impl Operation {
    /// Static message used when the server gave no usable explanation.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Login => "Failed to login. Please try again.",
            Operation::Register => "Failed to create account. Please try again.",
            Operation::ListTasks => "Failed to load tasks. Please try again.",
            Operation::CreateTask => "Failed to add task. Please try again.",
            Operation::UpdateTask => "Failed to update task. Please try again.",
            Operation::DeleteTask => "Failed to delete task. Please try again.",
        }
    }
}

pub const NOT_SIGNED_IN_MESSAGE: &str = "Please log in to manage your tasks.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Invalid(String),

    #[error("{}", NOT_SIGNED_IN_MESSAGE)]
    NotSignedIn,

    #[error("{}", rejected_message(.op, .message))]
    Rejected {
        op: Operation,
        status: u16,
        message: Option<String>,
    },

    #[error("{}", .op.fallback_message())]
    Transport {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}", .op.fallback_message())]
    Decode { op: Operation, detail: String },

    #[error("Invalid API configuration: {0}")]
    Config(String),
}

fn rejected_message(op: &Operation, message: &Option<String>) -> String {
    message
        .clone()
        .unwrap_or_else(|| op.fallback_message().to_string())
}

impl ApiError {
    pub fn rejected(op: Operation, status: u16, message: Option<String>) -> Self {
        ApiError::Rejected {
            op,
            status,
            message,
        }
    }

    /// HTTP status the server answered with, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The stored token was refused. The session is probably expired.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Raised before any request left the client.
    pub fn is_local(&self) -> bool {
        matches!(self, ApiError::Invalid(_) | ApiError::NotSignedIn)
    }
}

impl From<store::models::FieldError> for ApiError {
    fn from(e: store::models::FieldError) -> Self {
        ApiError::Invalid(e.to_string())
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Looks at `message`, then `error` (string or `{ message }`), and finally
/// accepts a short plain-text body. Blank strings do not count.
pub fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        // Some endpoints answer with a bare string; HTML error pages are noise
        if body.len() <= 200 && !body.starts_with('<') {
            return Some(body.to_string());
        }
        return None;
    };

    let non_blank = |v: &serde_json::Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    if let Some(message) = value.get("message").and_then(non_blank) {
        return Some(message);
    }
    match value.get("error") {
        Some(error) if error.is_string() => non_blank(error),
        Some(error) => error.get("message").and_then(non_blank),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefers_message() {
        let body = r#"{"message":"Email already in use","error":"Conflict"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("Email already in use"));
    }

    #[test]
    fn test_extract_falls_back_to_error_field() {
        assert_eq!(
            extract_message(r#"{"error":"Invalid token"}"#).as_deref(),
            Some("Invalid token")
        );
        assert_eq!(
            extract_message(r#"{"error":{"message":"Task not found"}}"#).as_deref(),
            Some("Task not found")
        );
    }

    #[test]
    fn test_extract_ignores_blank_and_html() {
        assert_eq!(extract_message(""), None);
        assert_eq!(extract_message(r#"{"message":"  "}"#), None);
        assert_eq!(extract_message("<html><body>502</body></html>"), None);
        assert_eq!(extract_message(r#"{"status":"fail"}"#), None);
    }

    #[test]
    fn test_extract_plain_text_body() {
        assert_eq!(
            extract_message("Failed to create task").as_deref(),
            Some("Failed to create task")
        );
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let err = ApiError::rejected(Operation::DeleteTask, 500, None);
        assert_eq!(err.to_string(), "Failed to delete task. Please try again.");

        let err = ApiError::rejected(Operation::DeleteTask, 404, Some("Todo not found".to_string()));
        assert_eq!(err.to_string(), "Todo not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_auth_error_detection() {
        assert!(ApiError::rejected(Operation::ListTasks, 401, None).is_auth_error());
        assert!(!ApiError::rejected(Operation::ListTasks, 500, None).is_auth_error());
        assert!(!ApiError::NotSignedIn.is_auth_error());
        assert!(ApiError::NotSignedIn.is_local());
    }
}
