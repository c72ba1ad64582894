use std::sync::Arc;

use crate::{
    constants::prompts::enhance_content_prompt,
    errors::{AppError, AppResult},
    models::{domain::EnhancedContent, dto::request::EnhanceContentRequestDto},
    services::{
        completion_service::{CompletionClient, CompletionPrompt},
        settings_service::SettingsService,
    },
};

pub const CONTENT_NOT_CONFIGURED_MESSAGE: &str =
    "AI service not configured. Please add your API key in Settings.";

/// Level adaptation of teaching material. Only available with an AI key.
pub struct ContentService {
    settings: Arc<SettingsService>,
    client: Arc<dyn CompletionClient>,
}

impl ContentService {
    pub fn new(settings: Arc<SettingsService>, client: Arc<dyn CompletionClient>) -> Self {
        Self { settings, client }
    }

    pub async fn enhance(&self, request: EnhanceContentRequestDto) -> AppResult<EnhancedContent> {
        let settings = self.settings.snapshot().await;
        if !settings.is_configured() {
            return Err(AppError::NotConfigured(
                CONTENT_NOT_CONFIGURED_MESSAGE.to_string(),
            ));
        }

        if request.text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Content to enhance must not be blank".to_string(),
            ));
        }

        let prompt = enhance_content_prompt(
            &request.text,
            request.enhancement,
            request.target_level,
            request.additional_instructions.as_deref(),
        );
        let enhanced_text = self
            .client
            .complete(&settings, &CompletionPrompt::text(prompt))
            .await?;

        log::info!(
            "Enhanced {} chars of content ({}, {})",
            request.text.chars().count(),
            request.enhancement.as_str(),
            request.target_level
        );

        Ok(EnhancedContent {
            enhanced_text,
            enhancement: request.enhancement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{AiSettings, CefrLevel, Enhancement};
    use crate::services::completion_service::MockCompletionClient;

    fn service(settings: AiSettings, client: MockCompletionClient) -> ContentService {
        let client: Arc<dyn CompletionClient> = Arc::new(client);
        let settings = Arc::new(SettingsService::new(settings, Arc::clone(&client)));
        ContentService::new(settings, client)
    }

    fn request(text: &str) -> EnhanceContentRequestDto {
        EnhanceContentRequestDto {
            text: text.to_string(),
            enhancement: Enhancement::CulturalContext,
            target_level: CefrLevel::A2,
            additional_instructions: Some("Mention Japan".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_requires_configuration() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();

        let result = service(AiSettings::default(), client)
            .enhance(request("Tea ceremonies are old."))
            .await;

        match result {
            Err(AppError::NotConfigured(message)) => {
                assert_eq!(message, CONTENT_NOT_CONFIGURED_MESSAGE)
            }
            other => panic!("expected NotConfigured, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_returns_reply_verbatim() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_, prompt| {
            assert!(prompt.text.contains("- Enhancement type: culturalContext"));
            assert!(prompt.text.contains("- Target language level: A2"));
            assert!(prompt.text.contains("- Additional instructions: Mention Japan"));
            Ok("Tea ceremonies are very old. In Japan...".to_string())
        });

        let enhanced = service(AiSettings::new(Some("sk"), "m"), client)
            .enhance(request("Tea ceremonies are old."))
            .await
            .unwrap();

        assert_eq!(enhanced.enhanced_text, "Tea ceremonies are very old. In Japan...");
        assert_eq!(enhanced.enhancement, Enhancement::CulturalContext);
    }

    #[actix_web::test]
    async fn test_upstream_error_propagates() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_, _| Err(AppError::UpstreamError("quota exceeded".to_string())));

        let result = service(AiSettings::new(Some("sk"), "m"), client)
            .enhance(request("Text"))
            .await;

        assert!(matches!(result, Err(AppError::UpstreamError(ref m)) if m == "quota exceeded"));
    }

    #[actix_web::test]
    async fn test_blank_text_is_rejected() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();

        let result = service(AiSettings::new(Some("sk"), "m"), client)
            .enhance(request("   "))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
