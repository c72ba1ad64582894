use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::LessonPlan,
        dto::{request::LessonPlanRequestDto, response::ExportResponse},
    },
};

#[post("/api/lessons/generate")]
pub async fn generate_lesson_plan(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LessonPlanRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let generated = state.lesson_service.generate(request).await;
    Ok(HttpResponse::Ok().json(generated))
}

#[post("/api/lessons/export")]
pub async fn export_lesson_plan(plan: web::Json<LessonPlan>) -> HttpResponse {
    HttpResponse::Ok().json(ExportResponse::markdown(plan.to_markdown()))
}
