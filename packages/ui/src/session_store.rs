//! Platform-appropriate session persistence.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorage`]
//! - **Desktop** (native): one file per key under `<data_dir>/taskdeck/`
//! - **WASM without `web`**: in-memory only, nothing survives a reload

/// Create a session store for this platform. `namespace` prefixes every key;
/// an empty namespace uses the bare `token` / `user` keys.
pub fn make_session_store(namespace: &str) -> store::SessionStore<impl store::StorageBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::with_namespace(store::LocalStorage::new(), namespace)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::SessionStore::with_namespace(store::MemoryStore::new(), namespace)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("taskdeck");
        store::SessionStore::with_namespace(store::FileStore::new(base), namespace)
    }
}
