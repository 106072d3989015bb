use super::{TEST_API_KEY, TEST_VOICE_ID};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

pub const FAKE_MP3: &[u8] = b"ID3\x04\x00fake-mp3-frames";

fn speech_path() -> String {
    format!("/v1/text-to-speech/{}", TEST_VOICE_ID)
}

/// Any synthesis request succeeds with `FAKE_MP3`
pub fn mock_success(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", speech_path().as_str())
        .match_header("xi-api-key", TEST_API_KEY)
        .match_header("accept", "audio/mpeg")
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(FAKE_MP3)
}

/// Succeeds only for a request carrying exactly `text`
pub fn mock_success_for_text(server: &mut ServerGuard, text: &str) -> Mock {
    mock_success(server).match_body(Matcher::PartialJson(json!({
        "text": text,
        "model_id": "eleven_v3",
        "voice_settings": {
            "stability": 0.5,
            "similarity_boost": 0.65,
            "use_speaker_boost": true
        }
    })))
}

pub fn mock_error(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("POST", speech_path().as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
}
