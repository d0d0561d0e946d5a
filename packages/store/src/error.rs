use thiserror::Error;

/// Failure reading or writing persisted client state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform storage could not be reached (e.g. `localStorage` disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored value is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
