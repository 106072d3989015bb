use super::error::BatchError;
use super::model::GenerationJob;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

const PROMPT: &str = "Press Enter to continue with the next audio...";

/// Waits between freshly generated items.
///
/// Called only after a job produced a new artifact; skipped jobs never pause.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, job: &GenerationJob) -> Result<(), BatchError>;
}

pub struct NoPause;

#[async_trait]
impl Pacer for NoPause {
    async fn pause(&self, _job: &GenerationJob) -> Result<(), BatchError> {
        Ok(())
    }
}

pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self, job: &GenerationJob) -> Result<(), BatchError> {
        tracing::debug!(
            monument = %job.unit().monument,
            delay_ms = self.delay.as_millis(),
            "Pacing delay"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Blocks on one line of operator input after printing a prompt.
///
/// End of input counts as an acknowledgment.
pub struct InteractivePrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl InteractivePrompt<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, W) {
        (self.input.into_inner(), self.output.into_inner())
    }
}

#[async_trait]
impl<R, W> Pacer for InteractivePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn pause(&self, job: &GenerationJob) -> Result<(), BatchError> {
        {
            let mut output = self.output.lock().await;
            output
                .write_all(PROMPT.as_bytes())
                .await
                .map_err(BatchError::ControlInput)?;
            output.flush().await.map_err(BatchError::ControlInput)?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(BatchError::ControlInput)?;

        if read == 0 {
            tracing::warn!(
                monument = %job.unit().monument,
                "Operator input closed, continuing without pause"
            );
        }

        Ok(())
    }
}
