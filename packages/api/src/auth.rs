//! Login and signup forms, with the checks run before anything is sent.

use serde::{Deserialize, Serialize};
use store::{Session, User};

use crate::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() {
            return Err(ApiError::Invalid("Email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(ApiError::Invalid("Password is required".to_string()));
        }
        Ok(())
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::Invalid("Username is required".to_string()));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::Invalid("Please enter a valid email".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Invalid(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::Invalid("Passwords do not match".to_string()));
        }
        Ok(())
    }
}

/// What a successful registration gave us.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registered {
    /// The API issued a token with the new account.
    SignedIn(Session),
    /// Account exists but the user still has to log in.
    AccountCreated,
}

/// `data` of a login response.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub token: String,
    pub user: User,
}

impl LoginData {
    pub fn into_session(self) -> Session {
        Session::new(self.user, self.token)
    }
}

/// Interpret a registration response body.
///
/// The body may be the user itself, `{ user, token }`, or either of those
/// wrapped in `data`. A session is only produced when a token is present.
pub(crate) fn registered_from(body: &serde_json::Value) -> Registered {
    let payload = body.get("data").unwrap_or(body);
    let token = payload
        .get("token")
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty());
    let Some(token) = token else {
        return Registered::AccountCreated;
    };
    let user = payload.get("user").unwrap_or(payload);
    match User::deserialize(user) {
        Ok(user) => Registered::SignedIn(Session::new(user, token)),
        Err(e) => {
            tracing::warn!("Registration returned a token without a usable user: {}", e);
            Registered::AccountCreated
        }
    }
}
