use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::FeedbackRequestDto, response::FeedbackReportResponse},
};

#[post("/api/feedback")]
pub async fn analyse_writing(
    state: web::Data<Arc<AppState>>,
    request: web::Json<FeedbackRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    if request.text.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Text to analyse must not be blank".to_string(),
        ));
    }

    let generated = state
        .feedback_service
        .analyse(&request.text)
        .await
        .map(FeedbackReportResponse::from);
    Ok(HttpResponse::Ok().json(generated))
}
