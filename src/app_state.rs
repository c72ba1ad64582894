use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        CompletionClient, ContentService, FeedbackService, LessonService, OpenRouterClient,
        QuizService, SettingsService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub settings_service: Arc<SettingsService>,
    pub quiz_service: Arc<QuizService>,
    pub lesson_service: Arc<LessonService>,
    pub feedback_service: Arc<FeedbackService>,
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = Arc::new(OpenRouterClient::new(&config)?);
        Ok(Self::with_client(config, client))
    }

    /// Wires every service around one completion client.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let settings_service = Arc::new(SettingsService::from_config(&config, Arc::clone(&client)));

        Self {
            quiz_service: Arc::new(QuizService::new(
                Arc::clone(&settings_service),
                Arc::clone(&client),
            )),
            lesson_service: Arc::new(LessonService::new(
                Arc::clone(&settings_service),
                Arc::clone(&client),
            )),
            feedback_service: Arc::new(FeedbackService::new(
                Arc::clone(&settings_service),
                Arc::clone(&client),
            )),
            content_service: Arc::new(ContentService::new(
                Arc::clone(&settings_service),
                client,
            )),
            settings_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[actix_web::test]
    async fn test_new_starts_unconfigured_without_key() {
        let state = AppState::new(Config::test_config()).unwrap();
        let status = state.settings_service.status().await;

        assert!(!status.configured);
        assert_eq!(status.model, state.config.ai_model);
    }
}
