/// Custom error types for the text-to-video player tool
#[derive(Debug, thiserror::Error)]
pub enum Text2VideoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Browser launch error: {0}")]
    Browser(String),
}

impl Text2VideoError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn browser(message: impl Into<String>) -> Self {
        Self::Browser(message.into())
    }

    pub fn missing_env_var(var_name: &str) -> Self {
        Self::Config(format!("Missing environment variable: {}", var_name))
    }

    pub fn empty_key(key_name: &str) -> Self {
        Self::Config(format!("API key is empty: {}", key_name))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Text2VideoError>;

/// Constants used throughout the application
pub mod constants {
    // Configuration constants
    pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
    pub const ELEVENLABS_API_KEY_VAR: &str = "ELEVENLABS_API_KEY";
    pub const SIMLI_API_KEY_VAR: &str = "SIMLI_API_KEY";

    // Output constants
    pub const PLAYER_FILENAME: &str = "video_player.html";

    // Diagnostic messages
    pub const NO_STREAM_URL_MESSAGE: &str = "No stream URL found in response";
}
