use std::env;

use serde::Deserialize;

use crate::errors::{constants, Result, Text2VideoError};

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub elevenlabs_api_key: String,
    pub simli_api_key: String,
}

impl Config {
    /// Load configuration from `config.toml` in the working directory,
    /// falling back to the environment when the file is absent.
    ///
    /// The binary loads an untracked `.env` file into the environment
    /// before calling this.
    pub fn load() -> Result<Self> {
        let config = std::fs::read_to_string(constants::DEFAULT_CONFIG_PATH);
        let config = if let Ok(config) = config {
            toml::from_str::<Config>(&config)?
        } else {
            Config::from_env()?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let elevenlabs_api_key = env::var(constants::ELEVENLABS_API_KEY_VAR)
            .map_err(|_| Text2VideoError::missing_env_var(constants::ELEVENLABS_API_KEY_VAR))?;
        let simli_api_key = env::var(constants::SIMLI_API_KEY_VAR)
            .map_err(|_| Text2VideoError::missing_env_var(constants::SIMLI_API_KEY_VAR))?;

        Ok(Config {
            elevenlabs_api_key,
            simli_api_key,
        })
    }

    /// Both keys must be present and non-empty before the request is built;
    /// the remote API rejects empty keys with an opaque error otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.elevenlabs_api_key.trim().is_empty() {
            return Err(Text2VideoError::empty_key("elevenlabs_api_key"));
        }
        if self.simli_api_key.trim().is_empty() {
            return Err(Text2VideoError::empty_key("simli_api_key"));
        }

        Ok(())
    }
}
