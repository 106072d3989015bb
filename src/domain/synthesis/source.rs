use super::error::SynthesisError;
use std::path::{Path, PathBuf};

/// Where the text to synthesize comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Literal(String),
    File(PathBuf),
}

impl TextSource {
    /// Read the text and trim surrounding whitespace.
    ///
    /// Empty results are rejected here, before any request is built.
    pub async fn load(&self) -> Result<String, SynthesisError> {
        let raw = match self {
            TextSource::Literal(text) => text.clone(),
            TextSource::File(path) => read_text_file(path).await?,
        };

        let text = raw.trim();
        if text.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        Ok(text.to_string())
    }
}

async fn read_text_file(path: &Path) -> Result<String, SynthesisError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(SynthesisError::SourceNotFound(path.to_path_buf()))
        }
        Err(e) => Err(SynthesisError::ReadSource {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// A parsed `[--file <path> | <text>] <destination>` command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisInvocation {
    pub source: TextSource,
    pub destination: PathBuf,
}

impl SynthesisInvocation {
    /// Build an invocation from the `--file` option and the positional arguments.
    ///
    /// With `--file` the only positional is the destination; otherwise the
    /// positionals are the literal text followed by the destination.
    pub fn from_args(
        file: Option<PathBuf>,
        positionals: Vec<String>,
    ) -> Result<Self, SynthesisError> {
        let mut positionals = positionals.into_iter();

        let source = match file {
            Some(path) => TextSource::File(path),
            None => match positionals.next() {
                Some(text) => TextSource::Literal(text),
                None => {
                    return Err(SynthesisError::Usage(
                        "missing text and destination".to_string(),
                    ))
                }
            },
        };

        let destination = positionals
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| SynthesisError::Usage("missing destination file".to_string()))?;

        if let Some(extra) = positionals.next() {
            return Err(SynthesisError::Usage(format!(
                "unexpected argument '{}'",
                extra
            )));
        }

        Ok(Self {
            source,
            destination,
        })
    }
}
