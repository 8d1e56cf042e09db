use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ChatRequest, response::ChatResponse},
};

/// Proxies one chat message to the conversational agent, keyed by the
/// caller's session id. Entirely separate from the quiz endpoints.
#[post("/send-message")]
pub async fn send_message(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate().map_err(|_| {
        AppError::ValidationError("Message and Session ID are required.".to_string())
    })?;

    let fulfillment_text = state
        .chat_agent
        .detect_intent(&request.message, &request.session_id)
        .await?;

    Ok(HttpResponse::Ok().json(ChatResponse { fulfillment_text }))
}
