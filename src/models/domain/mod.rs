pub mod content;
pub mod feedback;
pub mod generated;
pub mod lesson_plan;
pub mod level;
pub mod note;
pub mod quiz;
pub mod quiz_question;
pub mod settings;
pub use content::{EnhancedContent, Enhancement};
pub use feedback::{CategoryBands, FeedbackReport, ScoreBand};
pub use generated::{Generated, GenerationSource};
pub use lesson_plan::LessonPlan;
pub use level::{CefrLevel, ProficiencyLevel};
pub use note::{NoteAction, NoteEdit};
pub use quiz::{Quiz, QuizRequest};
pub use quiz_question::{CorrectAnswer, Difficulty, Question, QuestionType};
pub use settings::{AiSettings, SettingsStatus};
