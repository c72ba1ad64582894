use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::DEFAULT_AI_MODEL;

/// Credentials and model used for a single completion call.
#[derive(Clone, Debug)]
pub struct AiSettings {
    pub api_key: Option<SecretString>,
    pub model: String,
}

impl AiSettings {
    pub fn new(api_key: Option<&str>, model: &str) -> Self {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::from(key.to_string()));
        let model = match model.trim() {
            "" => DEFAULT_AI_MODEL.to_string(),
            trimmed => trimmed.to_string(),
        };

        Self { api_key, model }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    pub fn status(&self) -> SettingsStatus {
        SettingsStatus {
            configured: self.is_configured(),
            model: self.model.clone(),
        }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self::new(None, DEFAULT_AI_MODEL)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SettingsStatus {
    pub configured: bool,
    pub model: String,
}
