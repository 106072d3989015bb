use crate::domain::synthesis::{SynthesisError, SynthesisRequest};
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech provider.
///
/// Implementations make exactly one provider call per `synthesize` and never retry.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize the request into encoded audio (MP3)
    ///
    /// # Errors
    /// Returns `SynthesisError::Api` for a non-success status and
    /// `SynthesisError::Transport` when the provider cannot be reached
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError>;

    /// Provider name used in logs
    fn provider(&self) -> &'static str;
}
