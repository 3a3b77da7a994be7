use thiserror::Error;

/// Errors raised around the state machine; handling actions never fails
#[derive(Debug, Error)]
pub enum BookingError {
    /// Writing an output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering JSON failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A global logger was already installed
    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result alias for fallible crate operations
pub type Result<T> = std::result::Result<T, BookingError>;
