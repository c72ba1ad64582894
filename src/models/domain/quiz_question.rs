use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    FillInBlank,
    TrueFalse,
    Matching,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::FillInBlank => "fill-in-blank",
            QuestionType::TrueFalse => "true-false",
            QuestionType::Matching => "matching",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::FillInBlank => "Fill in the Blank",
            QuestionType::TrueFalse => "True/False",
            QuestionType::Matching => "Matching",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

/// An index into `options`, a true/false flag, or a literal answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Index(usize),
    Bool(bool),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    // only multiple-choice and matching questions carry options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: CorrectAnswer,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Question {
    /// Human readable answer, resolving option indexes to `"C. had started"`.
    pub fn answer_display(&self) -> String {
        match (&self.correct_answer, &self.options) {
            (CorrectAnswer::Index(index), Some(options)) => match options.get(*index) {
                Some(option) => format!("{}. {}", option_letter(*index), option),
                None => index.to_string(),
            },
            (CorrectAnswer::Index(index), None) => index.to_string(),
            (CorrectAnswer::Bool(true), _) => "True".to_string(),
            (CorrectAnswer::Bool(false), _) => "False".to_string(),
            (CorrectAnswer::Text(text), _) => text.clone(),
        }
    }
}

pub(crate) fn option_letter(index: usize) -> char {
    char::from_u32('A' as u32 + (index % 26) as u32).unwrap_or('?')
}
