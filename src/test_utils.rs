use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    app_state::AppState,
    config::Config,
    models::{
        domain::{CefrLevel, ProficiencyLevel, QuestionType, QuizRequest},
        dto::request::LessonPlanRequestDto,
    },
    services::completion_service::MockCompletionClient,
};

pub mod fixtures {
    use super::*;

    /// State whose settings start without an API key.
    pub fn state_with(client: MockCompletionClient) -> Arc<AppState> {
        Arc::new(AppState::with_client(Config::test_config(), Arc::new(client)))
    }

    /// Unconfigured state whose client fails the test if it is ever called.
    pub fn unconfigured_state() -> Arc<AppState> {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();
        state_with(client)
    }

    pub fn configured_state(client: MockCompletionClient) -> Arc<AppState> {
        let mut config = Config::test_config();
        config.ai_api_key = Some(SecretString::from("sk-test".to_string()));
        Arc::new(AppState::with_client(config, Arc::new(client)))
    }

    pub fn quiz_request(topic: &str, level: ProficiencyLevel, count: usize, types: &[QuestionType]) -> QuizRequest {
        QuizRequest {
            topic: topic.to_string(),
            level,
            question_count: count,
            question_types: types.to_vec(),
            time_limit_minutes: 15,
        }
    }

    pub fn lesson_request(topic: &str, level: CefrLevel, duration: u32) -> LessonPlanRequestDto {
        LessonPlanRequestDto {
            topic: topic.to_string(),
            level,
            outcomes: String::new(),
            duration_minutes: duration,
        }
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[actix_web::test]
    async fn test_fixture_states() {
        assert!(!unconfigured_state().settings_service.status().await.configured);

        let state = configured_state(super::MockCompletionClient::new());
        assert!(state.settings_service.status().await.configured);
    }

    #[test]
    fn test_quiz_request_fixture() {
        let request = quiz_request("Idioms", super::ProficiencyLevel::Advanced, 4, &[]);
        assert_eq!(request.question_count, 4);
        assert!(request.question_types.is_empty());
    }
}
