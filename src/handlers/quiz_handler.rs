use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::Quiz,
        dto::{request::GenerateQuizRequestDto, response::ExportResponse},
    },
};

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let generated = state.quiz_service.generate(request.into()).await;
    Ok(HttpResponse::Ok().json(generated))
}

#[post("/api/quizzes/export")]
pub async fn export_quiz(quiz: web::Json<Quiz>) -> HttpResponse {
    HttpResponse::Ok().json(ExportResponse::markdown(quiz.to_markdown()))
}
