use crate::domain::batch::{BatchError, RunOutcome};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;

pub const CLIENT_BINARY: &str = "generate-tts";

/// Runs one synthesis from a source text file into a target audio file.
#[async_trait]
pub trait SynthesisRunner: Send + Sync {
    async fn run(&self, source: &Path, target: &Path) -> Result<RunOutcome, BatchError>;
}

/// Runs the `generate-tts` binary as a child process with inherited stdio.
pub struct ChildProcessRunner {
    program: PathBuf,
    envs: Vec<(String, String)>,
}

impl ChildProcessRunner {
    /// Use `explicit` when given, otherwise look next to the running executable.
    ///
    /// Fails before any work starts when the executable is not there.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self, BatchError> {
        let program = match explicit {
            Some(path) => path,
            None => {
                let current = std::env::current_exe().map_err(|e| {
                    BatchError::Configuration(format!("cannot resolve current executable: {}", e))
                })?;
                let dir = current.parent().ok_or_else(|| {
                    BatchError::Configuration("current executable has no parent".to_string())
                })?;
                dir.join(format!("{}{}", CLIENT_BINARY, std::env::consts::EXE_SUFFIX))
            }
        };

        if !program.is_file() {
            return Err(BatchError::Configuration(format!(
                "synthesis client not found at {}",
                program.display()
            )));
        }

        Ok(Self::new(program))
    }

    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            envs: Vec::new(),
        }
    }

    /// Extra environment for the child, on top of the inherited one
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl SynthesisRunner for ChildProcessRunner {
    async fn run(&self, source: &Path, target: &Path) -> Result<RunOutcome, BatchError> {
        let status = tokio::process::Command::new(&self.program)
            .arg("--file")
            .arg(source)
            .arg(target)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| BatchError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if status.success() {
            return Ok(RunOutcome::Success);
        }

        // Terminated by a signal when there is no code
        let code = status.code().unwrap_or(1);
        Ok(RunOutcome::Failed { code })
    }
}
