use crate::domain::content::ContentError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read operator input: {0}")]
    ControlInput(#[source] std::io::Error),
    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("generation failed for {monument} (exit code {code}) after {generated} new audio files")]
    SynthesisFailed {
        monument: String,
        code: i32,
        generated: usize,
    },
}

impl BatchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// A failed child's own code is passed through; everything else is 1
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SynthesisFailed { code, .. } => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

impl From<ContentError> for BatchError {
    fn from(err: ContentError) -> Self {
        BatchError::Configuration(err.to_string())
    }
}
