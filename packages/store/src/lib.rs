pub mod config;
pub mod error;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::AppConfig;
pub use error::StoreError;
pub use models::{NewTask, Session, Task, TaskFields, TaskPatch, User, ValidTaskFields};
pub use session::{SessionStore, StorageBackend};
