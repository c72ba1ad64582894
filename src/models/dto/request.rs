use serde::Deserialize;
use validator::Validate;

use crate::models::domain::quiz::QuizRequest;
use crate::models::domain::{CefrLevel, Enhancement, NoteAction, ProficiencyLevel, QuestionType};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[serde(default)]
    pub level: ProficiencyLevel,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 20))]
    pub question_count: u32,

    #[serde(default = "default_question_types")]
    #[validate(length(min = 1, message = "Select at least one question type"))]
    pub question_types: Vec<QuestionType>,

    #[serde(default = "default_time_limit", alias = "timeLimit")]
    #[validate(range(min = 1, max = 180))]
    pub time_limit_minutes: u32,
}

fn default_question_count() -> u32 {
    5
}

fn default_question_types() -> Vec<QuestionType> {
    vec![QuestionType::MultipleChoice, QuestionType::FillInBlank]
}

fn default_time_limit() -> u32 {
    15
}

impl From<GenerateQuizRequestDto> for QuizRequest {
    fn from(dto: GenerateQuizRequestDto) -> Self {
        QuizRequest {
            topic: dto.topic,
            level: dto.level,
            question_count: dto.question_count as usize,
            question_types: dto.question_types,
            time_limit_minutes: dto.time_limit_minutes,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub level: CefrLevel,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub outcomes: String,

    #[serde(default = "default_lesson_duration", alias = "duration")]
    #[validate(range(min = 10, max = 240))]
    pub duration_minutes: u32,
}

fn default_lesson_duration() -> u32 {
    60
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedbackRequestDto {
    #[validate(length(min = 1, max = 20000))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceContentRequestDto {
    #[validate(length(min = 1, max = 20000))]
    pub text: String,

    #[serde(default)]
    pub enhancement: Enhancement,

    #[serde(default)]
    pub target_level: CefrLevel,

    #[validate(length(max = 1000))]
    pub additional_instructions: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NoteActionRequestDto {
    #[validate(length(max = 100000))]
    pub content: String,
    pub selection_start: usize,
    pub selection_end: usize,
    pub action: NoteAction,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequestDto {
    #[validate(length(max = 500))]
    pub api_key: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateApiKeyRequestDto {
    #[validate(length(max = 500))]
    pub api_key: String,
}
