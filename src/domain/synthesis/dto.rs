use serde::{Deserialize, Serialize};

/// Voice rendering parameters sent with every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.65,
            use_speaker_boost: true,
        }
    }
}

/// Body for POST /v1/text-to-speech/{voice_id}
///
/// The voice id travels in the URL, so it is skipped when serializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    #[serde(skip)]
    pub voice_id: String,
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}
