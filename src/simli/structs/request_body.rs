use serde::{Deserialize, Serialize};

use crate::simli::structs::voice_settings::VoiceSettings;

pub const AUDIO_PROVIDER: &str = "ElevenLabs";
pub const VOICE_NAME: &str = "JddqVF50ZSIR7SRbJE6u";
pub const MODEL_ID: &str = "eleven_flash_v2_5";

/// The narrated bulletin text, fixed at build time.
pub const SOURCE_TEXT: &str = "Seguridad.\n         Un tribunal de Manta sentenció a cuatro años de prisión, con agravantes, a cuatro personas que custodiaban a alias “Fito” durante su captura en Montecristi el 25 de junio de 2025. Los hoy condenados ocultaron información y facilitaron el escondite del líder de Los Choneros en un búnker dentro del inmueble. La Fiscalía demostró que conocían su actividad delictiva y lo protegieron, apoyándose en testimonios de agentes y peritajes técnicos. Fito fue extraditado a Estados Unidos el 20 de julio de 2025.";

/// Nested speech-synthesis request forwarded by Simli to the TTS provider.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct RequestBody {
    pub audioProvider: String,
    pub text: String,
    pub voiceName: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

impl Default for RequestBody {
    fn default() -> Self {
        Self {
            audioProvider: AUDIO_PROVIDER.to_string(),
            text: SOURCE_TEXT.to_string(),
            voiceName: VOICE_NAME.to_string(),
            model_id: MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }
}
