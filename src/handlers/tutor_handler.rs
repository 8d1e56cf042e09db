use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ResetSessionRequest, TutorChatRequest},
        response::ResetSessionResponse,
    },
};

/// One exchange with the interactive tutor. The session keeps the base
/// question and the conversation history between calls.
#[post("/interactive-chat")]
pub async fn interactive_chat(
    state: web::Data<AppState>,
    request: web::Json<TutorChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .tutor
        .chat(
            &request.session_id,
            request.question.as_deref(),
            &request.message,
        )
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Clears a tutor session so the next message starts from a blank history.
#[post("/reset-session")]
pub async fn reset_session(
    state: web::Data<AppState>,
    request: web::Json<ResetSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    state.tutor.reset(&request.session_id)?;
    Ok(HttpResponse::Ok().json(ResetSessionResponse {
        message: "Session reset successful.".to_string(),
    }))
}
