use std::sync::Arc;

use crate::{
    constants::prompts::lesson_plan_prompt,
    errors::AppResult,
    models::{
        domain::{
            lesson_plan::{Activity, Differentiation},
            AiSettings, Generated, LessonPlan,
        },
        dto::request::LessonPlanRequestDto,
    },
    services::{
        completion_service::{parse_json_reply, CompletionClient, CompletionPrompt},
        settings_service::SettingsService,
    },
};

pub const LESSON_FALLBACK_WARNING: &str =
    "Failed to generate lesson plan. Showing a template plan instead.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fixed four-stage plan (warm-up, presentation, practice, production)
/// around the requested topic.
pub fn template_lesson_plan(request: &LessonPlanRequestDto) -> LessonPlan {
    let topic = request.topic.trim();

    LessonPlan {
        title: format!("Understanding {}", topic),
        level: request.level.as_str().to_string(),
        duration: request.duration_minutes,
        objectives: vec![
            format!("Students will be able to identify key elements of {}", topic),
            format!(
                "Students will be able to use vocabulary related to {} in context",
                topic
            ),
            format!(
                "Students will be able to discuss {} using appropriate structures",
                topic
            ),
        ],
        activities: vec![
            Activity {
                name: "Warm-up Discussion".to_string(),
                activity_type: "warm-up".to_string(),
                duration: 10,
                description: format!(
                    "Students discuss what they already know about {} in pairs. Then share with the class.",
                    topic
                ),
                materials: None,
            },
            Activity {
                name: "Vocabulary Introduction".to_string(),
                activity_type: "presentation".to_string(),
                duration: 15,
                description: "Introduce key vocabulary with visual aids and example sentences."
                    .to_string(),
                materials: Some(strings(&["Vocabulary flashcards", "Projector"])),
            },
            Activity {
                name: "Guided Practice".to_string(),
                activity_type: "practice".to_string(),
                duration: 20,
                description: "Students complete gap-fill exercises and matching activities using target vocabulary."
                    .to_string(),
                materials: Some(strings(&["Worksheet", "Answer key"])),
            },
            Activity {
                name: "Group Discussion".to_string(),
                activity_type: "production".to_string(),
                duration: 15,
                description: "In small groups, students discuss questions related to the topic using target language."
                    .to_string(),
                materials: Some(strings(&["Discussion prompt cards"])),
            },
        ],
        assessment: "Monitor group discussions and collect written work to assess vocabulary usage and comprehension."
            .to_string(),
        differentiation: Differentiation {
            struggling: "Provide sentence frames and additional visual aids.".to_string(),
            advanced: "Encourage use of more complex structures and additional vocabulary."
                .to_string(),
        },
        materials: strings(&[
            "Vocabulary flashcards",
            "Projector and slides",
            "Handouts with exercises",
            "Discussion prompt cards",
        ]),
        reflection: strings(&[
            "Were students engaged throughout the lesson?",
            "Did students achieve the stated objectives?",
            "What would I change for next time?",
        ]),
    }
}

pub struct LessonService {
    settings: Arc<SettingsService>,
    client: Arc<dyn CompletionClient>,
}

impl LessonService {
    pub fn new(settings: Arc<SettingsService>, client: Arc<dyn CompletionClient>) -> Self {
        Self { settings, client }
    }

    pub async fn generate(&self, request: LessonPlanRequestDto) -> Generated<LessonPlan> {
        let settings = self.settings.snapshot().await;
        if !settings.is_configured() {
            return Generated::from_template(template_lesson_plan(&request));
        }

        match self.generate_with_ai(&request, &settings).await {
            Ok(plan) => {
                if plan.activity_minutes() != plan.duration {
                    log::warn!(
                        "AI lesson plan '{}' schedules {} of {} minutes",
                        plan.title,
                        plan.activity_minutes(),
                        plan.duration
                    );
                }
                Generated::from_ai(plan)
            }
            Err(err) => {
                log::error!("Error generating lesson plan: {}", err);
                Generated::from_template(template_lesson_plan(&request))
                    .with_warning(LESSON_FALLBACK_WARNING)
            }
        }
    }

    async fn generate_with_ai(
        &self,
        request: &LessonPlanRequestDto,
        settings: &AiSettings,
    ) -> AppResult<LessonPlan> {
        let prompt = lesson_plan_prompt(
            request.topic.trim(),
            request.level,
            &request.outcomes,
            request.duration_minutes,
        );
        let reply = self
            .client
            .complete(settings, &CompletionPrompt::text(prompt))
            .await?;
        parse_json_reply(&reply)
    }
}
