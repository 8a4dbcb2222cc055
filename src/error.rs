use thiserror::Error;

/// Application-specific error type
#[derive(Debug, Error)]
pub enum HydroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid tracker record: {0}")]
    InvalidRecord(&'static str),

    #[error("Could not determine data directory")]
    NoDataDirectory,

    #[error("Invalid weight: {0}")]
    InvalidWeight(&'static str),

    #[error("Setup was cancelled")]
    SetupCancelled,

    #[error("Scheduler channel disconnected")]
    SchedulerDisconnected,
}

/// Convenience type alias for Result with HydroError
pub type Result<T> = std::result::Result<T, HydroError>;
