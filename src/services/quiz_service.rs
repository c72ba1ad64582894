use std::sync::Arc;

use crate::{
    constants::prompts::quiz_prompt,
    errors::AppResult,
    models::domain::{AiSettings, Generated, Quiz, QuizRequest},
    services::{
        completion_service::{parse_json_reply, CompletionClient, CompletionPrompt},
        quiz_synthesis::synthesize_quiz,
        settings_service::SettingsService,
    },
};

pub const QUIZ_FALLBACK_WARNING: &str =
    "Failed to generate quiz. Please check your API configuration and try again.";

pub struct QuizService {
    settings: Arc<SettingsService>,
    client: Arc<dyn CompletionClient>,
}

impl QuizService {
    pub fn new(settings: Arc<SettingsService>, client: Arc<dyn CompletionClient>) -> Self {
        Self { settings, client }
    }

    /// Asks the AI for a quiz when configured; otherwise, or when that
    /// fails, the quiz is synthesized from the question banks.
    pub async fn generate(&self, request: QuizRequest) -> Generated<Quiz> {
        let settings = self.settings.snapshot().await;
        if !settings.is_configured() {
            log::debug!("AI not configured, synthesizing quiz on '{}'", request.topic);
            return Generated::from_template(synthesize_quiz(&request));
        }

        match self.generate_with_ai(&request, &settings).await {
            Ok(quiz) => Generated::from_ai(quiz),
            Err(err) => {
                log::error!("Error generating quiz: {}", err);
                Generated::from_template(synthesize_quiz(&request)).with_warning(QUIZ_FALLBACK_WARNING)
            }
        }
    }

    async fn generate_with_ai(
        &self,
        request: &QuizRequest,
        settings: &AiSettings,
    ) -> AppResult<Quiz> {
        let prompt = CompletionPrompt::text(quiz_prompt(request));
        let reply = self.client.complete(settings, &prompt).await?;
        parse_json_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::domain::{GenerationSource, ProficiencyLevel, QuestionType};
    use crate::services::completion_service::MockCompletionClient;
    use crate::test_utils::fixtures::quiz_request;

    fn request() -> QuizRequest {
        quiz_request(
            "Past Tenses",
            ProficiencyLevel::Beginner,
            3,
            &[QuestionType::MultipleChoice],
        )
    }

    fn service(settings: AiSettings, client: MockCompletionClient) -> QuizService {
        let client: Arc<dyn CompletionClient> = Arc::new(client);
        let settings = Arc::new(SettingsService::new(settings, Arc::clone(&client)));
        QuizService::new(settings, client)
    }

    #[actix_web::test]
    async fn test_unconfigured_uses_template_without_calling_ai() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();

        let generated = service(AiSettings::default(), client).generate(request()).await;

        assert_eq!(generated.source, GenerationSource::Template);
        assert!(generated.warning.is_none());
        assert_eq!(generated.result, synthesize_quiz(&request()));
    }

    #[actix_web::test]
    async fn test_ai_reply_is_parsed() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_, prompt| {
            assert!(prompt.text.contains("\"Past Tenses\""));
            Ok(r#"{
                "title": "Past Tenses Quiz",
                "description": "AI quiz",
                "level": "beginner",
                "timeLimit": 15,
                "questions": [
                    {"id": 1, "type": "true-false", "text": "Q", "correctAnswer": "True",
                     "difficulty": "easy", "explanation": "E", "skills": ["Grammar"]}
                ],
                "objectives": ["O"]
            }"#
            .to_string())
        });

        let generated = service(AiSettings::new(Some("sk"), "m"), client)
            .generate(request())
            .await;

        assert_eq!(generated.source, GenerationSource::Ai);
        assert_eq!(generated.result.title, "Past Tenses Quiz");
        assert_eq!(generated.result.questions.len(), 1);
    }

    #[actix_web::test]
    async fn test_unparseable_reply_falls_back_with_warning() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_, _| Ok("Here is a quiz about tenses!".to_string()));

        let generated = service(AiSettings::new(Some("sk"), "m"), client)
            .generate(request())
            .await;

        assert_eq!(generated.source, GenerationSource::Template);
        assert_eq!(generated.warning.as_deref(), Some(QUIZ_FALLBACK_WARNING));
        assert_eq!(generated.result.questions.len(), 3);
    }

    #[actix_web::test]
    async fn test_upstream_error_falls_back_with_warning() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_, _| Err(AppError::UpstreamError("rate limited".to_string())));

        let generated = service(AiSettings::new(Some("sk"), "m"), client)
            .generate(request())
            .await;

        assert_eq!(generated.source, GenerationSource::Template);
        assert!(generated.warning.is_some());
    }
}
