use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, InferenceRequest},
    services::{reply::extract_reply, session_id::upstream_session_id},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // Configuration first: a bad body on an unconfigured server is still a 500.
    let creds = state.config.credentials()?;

    let payload = ChatRequest::parse(&body)?;

    let session_id = upstream_session_id(&creds.agent_id, payload.session_id.as_deref());

    let request = InferenceRequest {
        user_id: creds.user_id,
        agent_id: creds.agent_id,
        session_id,
        message: payload.message,
    };

    let agent_body = state.agent.send(&creds.api_key, &request).await?;
    let response = extract_reply(&agent_body);

    tracing::info!(session_id = %request.session_id, "Agent replied");

    Ok(Json(ChatResponse {
        response,
        session_id: request.session_id,
    }))
}
