use crate::errors::ConfigError;
use std::env;
use studio_mentor::google::{GoogleMentor, GoogleMentorOptions, DEFAULT_MODEL_ID};

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model_id: String,
    pub base_url: Option<String>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required. `STUDIO_SOCIAL_MODEL` overrides the
    /// default model id and `GEMINI_BASE_URL` overrides the API endpoint
    /// (useful for stub servers).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let model_id = env::var("STUDIO_SOCIAL_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let base_url = env::var("GEMINI_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_key,
            model_id,
            base_url,
        })
    }

    /// Build the Gemini-backed mentor for this configuration.
    #[must_use]
    pub fn mentor(&self) -> GoogleMentor {
        GoogleMentor::new(
            self.model_id.clone(),
            GoogleMentorOptions {
                api_key: self.api_key.clone(),
                base_url: self.base_url.clone(),
                ..Default::default()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers all the environment cases; parallel tests must not
    // race on the same variables.
    #[test]
    fn from_env_reads_key_and_overrides() {
        env::remove_var("GEMINI_API_KEY");
        env::remove_var("STUDIO_SOCIAL_MODEL");
        env::remove_var("GEMINI_BASE_URL");
        assert_eq!(Config::from_env().unwrap_err(), ConfigError::MissingApiKey);

        env::set_var("GEMINI_API_KEY", "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
        assert_eq!(config.base_url, None);

        env::set_var("STUDIO_SOCIAL_MODEL", "gemini-exp");
        env::set_var("GEMINI_BASE_URL", "http://localhost:8000/v1beta");
        let config = Config::from_env().unwrap();
        assert_eq!(config.model_id, "gemini-exp");
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://localhost:8000/v1beta")
        );

        env::remove_var("GEMINI_API_KEY");
        env::remove_var("STUDIO_SOCIAL_MODEL");
        env::remove_var("GEMINI_BASE_URL");
    }
}
