use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("text is empty")]
    EmptyText,
    #[error("text has {chars} characters, limit is {limit}")]
    TextTooLong { chars: usize, limit: usize },
    #[error("text file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("failed to reach speech provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
