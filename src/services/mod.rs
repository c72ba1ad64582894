pub mod completion_service;
pub mod content_service;
pub mod feedback_service;
pub mod lesson_service;
pub mod note_service;
pub mod quiz_service;
pub mod quiz_synthesis;
pub mod settings_service;

pub use completion_service::{CompletionClient, CompletionPrompt, OpenRouterClient};
pub use content_service::ContentService;
pub use feedback_service::FeedbackService;
pub use lesson_service::LessonService;
pub use quiz_service::QuizService;
pub use settings_service::SettingsService;
