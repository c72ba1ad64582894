use std::sync::Arc;

use crate::{
    constants::prompts::feedback_prompt,
    errors::AppResult,
    models::domain::{
        feedback::{
            CategoryScore, FeedbackCategory, FeedbackDetails, FeedbackItem, Severity, TextSpan,
        },
        AiSettings, FeedbackReport, Generated,
    },
    services::{
        completion_service::{parse_json_reply, CompletionClient, CompletionPrompt},
        settings_service::SettingsService,
    },
};

pub const FEEDBACK_FALLBACK_WARNING: &str =
    "Failed to analyse writing. Showing sample feedback instead.";

fn item(
    category: FeedbackCategory,
    severity: Severity,
    issue: &str,
    (start, end): (usize, usize),
    suggestion: &str,
    explanation: &str,
) -> FeedbackItem {
    FeedbackItem {
        category,
        severity,
        issue: issue.to_string(),
        location: TextSpan { start, end },
        suggestion: suggestion.to_string(),
        explanation: explanation.to_string(),
    }
}

/// Sample report shown when no AI analysis is available. It does not
/// depend on the submitted text.
pub fn template_feedback() -> FeedbackReport {
    FeedbackReport {
        overall_score: 78,
        strengths: vec![
            "Good use of transitional phrases".to_string(),
            "Appropriate academic vocabulary".to_string(),
            "Clear introduction that states the main argument".to_string(),
        ],
        summary: "Your writing demonstrates good understanding of the topic with appropriate vocabulary. Focus on improving sentence structure and grammar consistency."
            .to_string(),
        details: FeedbackDetails {
            grammar: CategoryScore { score: 75, count: 4 },
            vocabulary: CategoryScore { score: 85, count: 2 },
            structure: CategoryScore { score: 70, count: 3 },
            coherence: CategoryScore { score: 82, count: 1 },
            style: CategoryScore { score: 78, count: 2 },
        },
        items: vec![
            item(
                FeedbackCategory::Grammar,
                Severity::High,
                "Subject-verb agreement error",
                (10, 25),
                "The student needs to arrive early",
                "When the subject is singular (student), the verb should also be singular (needs instead of need).",
            ),
            item(
                FeedbackCategory::Structure,
                Severity::Medium,
                "Run-on sentence",
                (80, 120),
                "Split into two sentences or use a semicolon",
                "Two independent clauses are joined without proper punctuation or a conjunction.",
            ),
            item(
                FeedbackCategory::Vocabulary,
                Severity::Low,
                "Word choice",
                (150, 158),
                "Consider using \"demonstrate\" instead of \"show\"",
                "In academic writing, more precise and formal vocabulary is preferred.",
            ),
        ],
    }
}

pub struct FeedbackService {
    settings: Arc<SettingsService>,
    client: Arc<dyn CompletionClient>,
}

impl FeedbackService {
    pub fn new(settings: Arc<SettingsService>, client: Arc<dyn CompletionClient>) -> Self {
        Self { settings, client }
    }

    pub async fn analyse(&self, text: &str) -> Generated<FeedbackReport> {
        let settings = self.settings.snapshot().await;
        if !settings.is_configured() {
            return Generated::from_template(template_feedback());
        }

        match self.analyse_with_ai(text, &settings).await {
            Ok(report) => {
                log::debug!(
                    "Writing scored {} ({:?})",
                    report.overall_score,
                    report.overall_band()
                );
                Generated::from_ai(report)
            }
            Err(err) => {
                log::error!("Error analysing writing: {}", err);
                Generated::from_template(template_feedback()).with_warning(FEEDBACK_FALLBACK_WARNING)
            }
        }
    }

    async fn analyse_with_ai(&self, text: &str, settings: &AiSettings) -> AppResult<FeedbackReport> {
        let reply = self
            .client
            .complete(settings, &CompletionPrompt::text(feedback_prompt(text)))
            .await?;
        parse_json_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::domain::{feedback::ScoreBand, GenerationSource};
    use crate::services::completion_service::MockCompletionClient;

    fn service(settings: AiSettings, client: MockCompletionClient) -> FeedbackService {
        let client: Arc<dyn CompletionClient> = Arc::new(client);
        let settings = Arc::new(SettingsService::new(settings, Arc::clone(&client)));
        FeedbackService::new(settings, client)
    }

    #[test]
    fn test_template_feedback_scores() {
        let report = template_feedback();

        assert_eq!(report.overall_score, 78);
        assert_eq!(report.overall_band(), ScoreBand::Fair);
        assert_eq!(report.details.vocabulary, CategoryScore { score: 85, count: 2 });
        assert_eq!(report.items.len(), 3);
        assert_eq!(report.items[2].location, TextSpan { start: 150, end: 158 });
    }

    #[actix_web::test]
    async fn test_unconfigured_returns_sample() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();

        let generated = service(AiSettings::default(), client)
            .analyse("My essay about the city.")
            .await;

        assert_eq!(generated.source, GenerationSource::Template);
        assert_eq!(generated.result, template_feedback());
    }

    #[actix_web::test]
    async fn test_configured_sends_text_in_prompt() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_, prompt| {
            assert!(prompt.text.contains("The students was late."));
            Ok(r#"{
                "overallScore": 90,
                "strengths": ["Concise"],
                "summary": "Good.",
                "details": {
                    "grammar": {"score": 88, "count": 1},
                    "vocabulary": {"score": 90, "count": 0},
                    "structure": {"score": 92, "count": 0},
                    "coherence": {"score": 91, "count": 0},
                    "style": {"score": 89, "count": 0}
                },
                "items": []
            }"#
            .to_string())
        });

        let generated = service(AiSettings::new(Some("sk"), "m"), client)
            .analyse("The students was late.")
            .await;

        assert_eq!(generated.source, GenerationSource::Ai);
        assert_eq!(generated.result.overall_band(), ScoreBand::Strong);
    }

    #[actix_web::test]
    async fn test_failure_falls_back_to_sample() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_, _| Err(AppError::UpstreamError("timeout".to_string())));

        let generated = service(AiSettings::new(Some("sk"), "m"), client)
            .analyse("Text")
            .await;

        assert_eq!(generated.warning.as_deref(), Some(FEEDBACK_FALLBACK_WARNING));
        assert_eq!(generated.result, template_feedback());
    }
}
