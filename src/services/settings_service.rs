use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    constants::prompts::API_KEY_PROBE_PROMPT,
    errors::{AppError, AppResult},
    models::{
        domain::{AiSettings, SettingsStatus},
        dto::{request::UpdateSettingsRequestDto, response::ApiKeyValidationResponse},
    },
    services::completion_service::{CompletionClient, CompletionPrompt},
};

/// Holds the live AI settings. Everything else reads a snapshot.
pub struct SettingsService {
    settings: RwLock<AiSettings>,
    client: Arc<dyn CompletionClient>,
}

impl SettingsService {
    pub fn new(initial: AiSettings, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            settings: RwLock::new(initial),
            client,
        }
    }

    pub fn from_config(config: &Config, client: Arc<dyn CompletionClient>) -> Self {
        let initial = AiSettings {
            api_key: config.ai_api_key.clone(),
            model: config.ai_model.clone(),
        };
        Self::new(initial, client)
    }

    pub async fn snapshot(&self) -> AiSettings {
        self.settings.read().await.clone()
    }

    pub async fn status(&self) -> SettingsStatus {
        self.settings.read().await.status()
    }

    /// Blank keys clear the stored key.
    pub async fn update_api_key(&self, api_key: &str) {
        let mut settings = self.settings.write().await;
        let updated = AiSettings::new(Some(api_key), &settings.model);
        settings.api_key = updated.api_key;
        log::info!(
            "AI API key {}",
            if settings.is_configured() { "updated" } else { "cleared" }
        );
    }

    pub async fn update_model(&self, model: &str) {
        let model = model.trim();
        if model.is_empty() {
            return;
        }

        let mut settings = self.settings.write().await;
        settings.model = model.to_string();
        log::info!("AI model set to {}", settings.model);
    }

    pub async fn update(&self, request: UpdateSettingsRequestDto) -> SettingsStatus {
        if let Some(api_key) = request.api_key.as_deref() {
            self.update_api_key(api_key).await;
        }
        if let Some(model) = request.model.as_deref() {
            self.update_model(model).await;
        }
        self.status().await
    }

    /// Probes the endpoint with `api_key` and the current model. The stored
    /// settings are left untouched.
    pub async fn validate_api_key(&self, api_key: &str) -> AppResult<ApiKeyValidationResponse> {
        if api_key.trim().is_empty() {
            return Err(AppError::ValidationError("API key is required".to_string()));
        }

        let model = self.settings.read().await.model.clone();
        let candidate = AiSettings::new(Some(api_key), &model);
        let prompt = CompletionPrompt::text(API_KEY_PROBE_PROMPT);

        let response = match self.client.complete(&candidate, &prompt).await {
            Ok(_) => ApiKeyValidationResponse {
                valid: true,
                message: "API key is valid!".to_string(),
            },
            Err(err) => {
                log::warn!("API key validation failed: {}", err);
                ApiKeyValidationResponse {
                    valid: false,
                    message: "Invalid API key or connection error".to_string(),
                }
            }
        };

        Ok(response)
    }
}
