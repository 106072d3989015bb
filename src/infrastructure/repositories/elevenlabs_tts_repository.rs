use super::tts_repository::TtsRepository;
use crate::domain::synthesis::{SynthesisError, SynthesisRequest};
use crate::infrastructure::config::SynthesisConfig;
use async_trait::async_trait;
use reqwest::{header, StatusCode};

const API_KEY_HEADER: &str = "xi-api-key";
const AUDIO_MEDIA_TYPE: &str = "audio/mpeg";

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsTtsRepository {
    pub fn new(config: &SynthesisConfig) -> Result<Self, SynthesisError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, voice_id)
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError> {
        let url = self.endpoint(&request.voice_id);

        tracing::debug!(
            url = %url,
            model = %request.model_id,
            text_length = request.text.len(),
            text_preview = %request.text.chars().take(200).collect::<String>(),
            "Calling ElevenLabs TTS API"
        );

        let mut response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::ACCEPT, AUDIO_MEDIA_TYPE)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "ElevenLabs TTS API call failed");
                SynthesisError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "ElevenLabs TTS API returned an error"
            );
            return Err(SynthesisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // Assemble the full body before anything is written
        let mut audio_data = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            audio_data.extend_from_slice(&chunk);
        }

        tracing::debug!(
            audio_size = audio_data.len(),
            "ElevenLabs TTS audio received successfully"
        );

        Ok(audio_data)
    }

    fn provider(&self) -> &'static str {
        "elevenlabs"
    }
}
