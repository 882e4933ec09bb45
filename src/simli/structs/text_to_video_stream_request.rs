use serde::{Deserialize, Serialize};

use crate::simli::structs::request_body::RequestBody;

pub const FACE_ID: &str = "c7451e55-ea04-41c8-ab47-bdca3e4a03d8";

/// Top-level `textToVideoStream` payload. Everything except the two API
/// keys is a fixed literal; the payload is never mutated after construction.
///
/// Example:
/// ```ignore
/// TextToVideoStreamRequest::new("elevenlabs-key", "simli-key")
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct TextToVideoStreamRequest {
    pub ttsAPIKey: String,
    pub simliAPIKey: String,
    pub faceId: String,
    pub requestBody: RequestBody,
}

impl TextToVideoStreamRequest {
    pub fn new(tts_api_key: impl Into<String>, simli_api_key: impl Into<String>) -> Self {
        Self {
            ttsAPIKey: tts_api_key.into(),
            simliAPIKey: simli_api_key.into(),
            faceId: FACE_ID.to_string(),
            requestBody: RequestBody::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simli::structs::request_body;

    #[test]
    fn test_payload_structure() {
        let request = TextToVideoStreamRequest::new("el-key", "simli-key");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["ttsAPIKey"], "el-key");
        assert_eq!(value["simliAPIKey"], "simli-key");
        assert_eq!(value["faceId"], FACE_ID);

        let body = &value["requestBody"];
        assert_eq!(body["audioProvider"], "ElevenLabs");
        assert_eq!(body["text"], request_body::SOURCE_TEXT);
        assert_eq!(body["voiceName"], request_body::VOICE_NAME);
        assert_eq!(body["model_id"], request_body::MODEL_ID);

        let settings = &body["voice_settings"];
        assert_eq!(settings["stability"], 0.1f32);
        assert_eq!(settings["similarity_boost"], 0.3f32);
        assert_eq!(settings["style"], 0.2f32);
    }

    #[test]
    fn test_payload_is_deterministic() {
        let a = serde_json::to_string(&TextToVideoStreamRequest::new("k1", "k2")).unwrap();
        let b = serde_json::to_string(&TextToVideoStreamRequest::new("k1", "k2")).unwrap();
        assert_eq!(a, b);
    }
}
