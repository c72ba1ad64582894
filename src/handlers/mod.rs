use actix_web::web;

use crate::errors::AppError;

pub mod content_handler;
pub mod feedback_handler;
pub mod health_handler;
pub mod lesson_handler;
pub mod note_handler;
pub mod quiz_handler;
pub mod settings_handler;

pub use content_handler::enhance_content;
pub use feedback_handler::analyse_writing;
pub use health_handler::health_check;
pub use lesson_handler::{export_lesson_plan, generate_lesson_plan};
pub use note_handler::apply_note_action;
pub use quiz_handler::{export_quiz, generate_quiz};
pub use settings_handler::{get_settings, update_settings, validate_api_key};

/// Registers every route. Malformed JSON bodies are reported as validation
/// errors in the same shape as every other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .service(health_check)
    .service(generate_quiz)
    .service(export_quiz)
    .service(generate_lesson_plan)
    .service(export_lesson_plan)
    .service(analyse_writing)
    .service(enhance_content)
    .service(apply_note_action)
    .service(get_settings)
    .service(update_settings)
    .service(validate_api_key);
}
