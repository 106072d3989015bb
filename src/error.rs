use crate::domain::batch::BatchError;
use crate::domain::synthesis::SynthesisError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

impl AppError {
    /// Process exit code reported to the caller
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Batch(err) => err.exit_code(),
            Self::Configuration(_) | Self::Synthesis(_) => 1,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
