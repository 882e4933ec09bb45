use serde::{Deserialize, Serialize};

/// Voice-tuning parameters forwarded to ElevenLabs, each a float in [0, 1].
///
/// Example:
/// ```ignore
/// VoiceSettings {
///     stability: 0.1f32,
///     similarity_boost: 0.3f32,
///     style: 0.2f32
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.1,
            similarity_boost: 0.3,
            style: 0.2,
        }
    }
}
