use thiserror::Error;

/// Failures raised by the browser adapters.
///
/// None of these are fatal: callers log them and carry on with the
/// in-memory state.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("browser document is not available")]
    NoDocument,

    #[error("local storage is unavailable: {0}")]
    StorageUnavailable(String),

    #[error("history update failed: {0}")]
    History(String),

    #[error("analytics payload could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("javascript call failed: {0}")]
    Js(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;
