//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`StorageBackend`] used on the **web platform**. It
//! talks to `window.localStorage` through [`web_sys::Storage`], so the session
//! written at login is still there after a page reload.
//!
//! The `Storage` handle is looked up on every call rather than cached:
//! `web_sys::Storage` is not `Send`, and the lookup is a cheap property read.

use crate::error::StoreError;
use crate::session::StorageBackend;

/// `window.localStorage` wrapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{value:?}"))
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
