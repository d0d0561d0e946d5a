//! # Session persistence over an abstract key/value backend
//!
//! [`SessionStore`] keeps the signed-in [`Session`] across reloads. It does not
//! know where bytes end up: all reads and writes go through the
//! [`StorageBackend`] trait, so the same logic runs against browser
//! `localStorage` ([`crate::LocalStorage`]), a directory of small files on
//! native targets ([`crate::FileStore`]) and an in-memory map in tests
//! ([`crate::MemoryStore`]).
//!
//! ## Layout
//!
//! Two keys, both optionally prefixed with a namespace (`"<ns>:token"`):
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | Bearer token, stored as-is |
//! | `user` | JSON `{ "id", "username", "email" }` |
//!
//! A session is only returned by [`SessionStore::load`] when both keys are
//! present and the user JSON parses. A half-written pair is treated as
//! signed out.

use crate::error::StoreError;
use crate::models::{Session, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Synchronous string key/value storage.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Reads and writes the persisted session.
#[derive(Clone, Debug)]
pub struct SessionStore<B: StorageBackend> {
    backend: B,
    namespace: String,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_namespace(backend, "")
    }

    /// Prefix both keys with `namespace`. An empty namespace uses the bare keys.
    pub fn with_namespace(backend: B, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn key(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}:{name}", self.namespace)
        }
    }

    /// The stored session, or `None` if signed out or storage is unreadable.
    pub fn load(&self) -> Option<Session> {
        match self.try_load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to read stored session: {}", e);
                None
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<Session>, StoreError> {
        let Some(token) = self.backend.get(&self.key(TOKEN_KEY))? else {
            return Ok(None);
        };
        let Some(raw_user) = self.backend.get(&self.key(USER_KEY))? else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&raw_user)?;
        Ok(Some(Session::new(user, token)))
    }

    /// Persist `session`, replacing whatever was stored.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let user = serde_json::to_string(&session.user)?;
        self.backend.set(&self.key(USER_KEY), &user)?;
        self.backend.set(&self.key(TOKEN_KEY), &session.token)?;
        Ok(())
    }

    /// Remove both keys.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key(TOKEN_KEY))?;
        self.backend.remove(&self.key(USER_KEY))?;
        Ok(())
    }
}
