use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::models::domain::level::ProficiencyLevel;
use crate::models::domain::quiz_question::{option_letter, Question, QuestionType};

/// Parameters for one quiz generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    pub topic: String,
    pub level: ProficiencyLevel,
    pub question_count: usize,
    /// Cycled in the order given.
    pub question_types: Vec<QuestionType>,
    pub time_limit_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub description: String,
    pub level: ProficiencyLevel,
    #[serde(rename = "timeLimit")]
    pub time_limit_minutes: u32,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub objectives: Vec<String>,
}

impl Quiz {
    /// Plain-text rendering used for copy and download.
    pub fn to_markdown(&self) -> String {
        let mut text = format!("# {}\n\n", self.title);
        let _ = writeln!(text, "{}\n", self.description);
        let _ = writeln!(text, "Level: {}", self.level);
        let _ = writeln!(text, "Time limit: {} minutes\n", self.time_limit_minutes);

        if !self.objectives.is_empty() {
            text.push_str("## Objectives\n");
            for objective in &self.objectives {
                let _ = writeln!(text, "- {}", objective);
            }
            text.push('\n');
        }

        text.push_str("## Questions\n");
        for question in &self.questions {
            let _ = writeln!(
                text,
                "### {}. {} ({}, {})",
                question.id,
                question.text,
                question.question_type.label(),
                question.difficulty
            );
            if let Some(options) = &question.options {
                for (index, option) in options.iter().enumerate() {
                    let _ = writeln!(text, "{}. {}", option_letter(index), option);
                }
            }
            let _ = writeln!(text, "Answer: {}", question.answer_display());
            if !question.explanation.is_empty() {
                let _ = writeln!(text, "Explanation: {}", question.explanation);
            }
            text.push('\n');
        }

        text
    }
}
