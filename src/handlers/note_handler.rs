use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{errors::AppError, models::dto::request::NoteActionRequestDto, services::note_service};

#[post("/api/notes/actions")]
pub async fn apply_note_action(
    request: web::Json<NoteActionRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let edit = note_service::apply_action(&request)?;
    Ok(HttpResponse::Ok().json(edit))
}
