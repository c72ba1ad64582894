use std::sync::Arc;

use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{UpdateSettingsRequestDto, ValidateApiKeyRequestDto},
};

#[get("/api/settings")]
pub async fn get_settings(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(state.settings_service.status().await)
}

#[put("/api/settings")]
pub async fn update_settings(
    state: web::Data<Arc<AppState>>,
    request: web::Json<UpdateSettingsRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let status = state.settings_service.update(request).await;
    Ok(HttpResponse::Ok().json(status))
}

#[post("/api/settings/validate")]
pub async fn validate_api_key(
    state: web::Data<Arc<AppState>>,
    request: web::Json<ValidateApiKeyRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.settings_service.validate_api_key(&request.api_key).await?;
    Ok(HttpResponse::Ok().json(response))
}
