use bs_platform::PlatformServicesError;
use thiserror::Error;

/// Host-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("platform call failed")]
    Platform(#[from] PlatformServicesError),

    #[error("Initialization error: {0}")]
    Init(String),
}

pub type AppResult<T> = Result<T, AppError>;
