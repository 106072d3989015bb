use super::dto::{SynthesisRequest, VoiceSettings};
use super::error::SynthesisError;
use crate::infrastructure::config::SynthesisConfig;
use crate::infrastructure::repositories::TtsRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SynthesisReport {
    pub destination: PathBuf,
    pub char_count: usize,
    pub audio_size_bytes: usize,
}

/// Turns one text unit into one audio file.
///
/// Single shot: a failed provider call is returned to the caller as-is.
pub struct SynthesisService {
    tts_repo: Arc<dyn TtsRepository>,
    voice_id: String,
    model_id: String,
    max_text_chars: Option<usize>,
}

impl SynthesisService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, config: &SynthesisConfig) -> Self {
        Self {
            tts_repo,
            voice_id: config.voice_id.clone(),
            model_id: config.model_id.clone(),
            max_text_chars: config.max_text_chars,
        }
    }

    /// The text is trimmed before the empty and length checks
    pub fn build_request(&self, text: &str) -> Result<SynthesisRequest, SynthesisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        if let Some(limit) = self.max_text_chars {
            let chars = text.chars().count();
            if chars > limit {
                return Err(SynthesisError::TextTooLong { chars, limit });
            }
        }

        Ok(SynthesisRequest {
            voice_id: self.voice_id.clone(),
            text: text.to_string(),
            model_id: self.model_id.clone(),
            voice_settings: VoiceSettings::default(),
        })
    }

    pub async fn synthesize_text(
        &self,
        text: &str,
        destination: &Path,
    ) -> Result<SynthesisReport, SynthesisError> {
        let request = self.build_request(text)?;
        let char_count = request.text.chars().count();

        tracing::info!(
            provider = self.tts_repo.provider(),
            voice = %request.voice_id,
            model = %request.model_id,
            characters_count = char_count,
            destination = %destination.display(),
            "Generating audio"
        );

        let start_time = std::time::Instant::now();
        let audio_data = self.tts_repo.synthesize(&request).await?;

        write_artifact(destination, &audio_data).await?;

        tracing::info!(
            destination = %destination.display(),
            audio_size_kb = format!("{:.1}", audio_data.len() as f64 / 1024.0),
            latency_ms = start_time.elapsed().as_millis(),
            "Audio saved"
        );

        Ok(SynthesisReport {
            destination: destination.to_path_buf(),
            char_count,
            audio_size_bytes: audio_data.len(),
        })
    }
}

/// Write the whole buffer to a sibling `.partial` file, then rename it into place.
///
/// The destination is either absent or complete; a failed write removes the partial file.
async fn write_artifact(destination: &Path, audio_data: &[u8]) -> Result<(), SynthesisError> {
    let write_error = |source: std::io::Error| SynthesisError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let file_name = destination.file_name().ok_or_else(|| {
        write_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "destination has no file name",
        ))
    })?;

    let mut partial_name = file_name.to_os_string();
    partial_name.push(".partial");
    let partial_path = destination.with_file_name(partial_name);

    if let Err(e) = tokio::fs::write(&partial_path, audio_data).await {
        let _ = tokio::fs::remove_file(&partial_path).await;
        return Err(write_error(e));
    }

    if let Err(e) = tokio::fs::rename(&partial_path, destination).await {
        let _ = tokio::fs::remove_file(&partial_path).await;
        return Err(write_error(e));
    }

    Ok(())
}
