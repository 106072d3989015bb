use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_VOICE_ID: &str = "fRDnLmEYnsOOldlrmhg5";
pub const MODEL_ID: &str = "eleven_v3";

pub const DEFAULT_TENANT: &str = "parque_europa";
pub const DEFAULT_LANGUAGE: &str = "es";
pub const DEFAULT_MODE: &str = "normal";
pub const DEFAULT_TENANTS_ROOT: &str = "tenants";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Settings for the synthesis client, resolved once at startup
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    pub api_key: String,
    pub voice_id: String,
    pub model_id: String,
    pub api_base_url: String,
    pub max_text_chars: Option<usize>,
    pub request_timeout: Option<Duration>,
}

impl SynthesisConfig {
    /// Defaults for everything except the credential
    pub fn for_api_key(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: MODEL_ID.to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
            max_text_chars: None,
            request_timeout: None,
        }
    }

    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`; blank values count as unset.
    ///
    /// The API key has no fallback.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("ELEVENLABS_API_KEY").ok_or_else(|| {
            AppError::Configuration("ELEVENLABS_API_KEY is not set".to_string())
        })?;

        let mut config = Self::for_api_key(api_key.trim());

        if let Some(voice_id) = get("ELEVENLABS_VOICE_ID") {
            config.voice_id = voice_id.trim().to_string();
        }
        if let Some(url) = get("ELEVENLABS_API_URL") {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(limit) = get("TTS_MAX_TEXT_CHARS") {
            config.max_text_chars = Some(parse_number("TTS_MAX_TEXT_CHARS", &limit)?);
        }
        if let Some(secs) = get("TTS_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Some(Duration::from_secs(parse_number(
                "TTS_REQUEST_TIMEOUT_SECS",
                &secs,
            )?));
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Configuration(format!("{} must be a number, got '{}'", key, value)))
}

/// How the orchestrator paces itself between freshly generated items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseMode {
    Prompt,
    Delay(Duration),
    Off,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub tenants_root: PathBuf,
    pub tenant: String,
    pub language: String,
    pub mode: String,
    pub pause: PauseMode,
    /// Explicit path to the `generate-tts` executable; `None` means next to the running binary
    pub client_executable: Option<PathBuf>,
}
