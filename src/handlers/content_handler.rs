use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::EnhanceContentRequestDto};

#[post("/api/content/enhance")]
pub async fn enhance_content(
    state: web::Data<Arc<AppState>>,
    request: web::Json<EnhanceContentRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let enhanced = state.content_service.enhance(request).await?;
    Ok(HttpResponse::Ok().json(enhanced))
}

#[cfg(test)]
mod tests {
    use crate::handlers::configure;
    use crate::test_utils::fixtures::{configured_state, unconfigured_state};
    use crate::services::completion_service::MockCompletionClient;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_enhance_requires_api_key() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(unconfigured_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/content/enhance")
            .set_json(json!({"text": "The weather is nice."}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "NOT_CONFIGURED");
        assert_eq!(
            body["error"],
            "AI service not configured. Please add your API key in Settings."
        );
    }

    #[actix_web::test]
    async fn test_enhance_returns_ai_text() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_, _| Ok("The weather is nice ☀️".to_string()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(configured_state(client)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/content/enhance")
            .set_json(json!({"text": "The weather is nice.", "enhancement": "visual", "targetLevel": "A1"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["enhanced_text"], "The weather is nice ☀️");
        assert_eq!(body["enhancement"], "visual");
    }
}
