use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    response::Json,
};
use std::net::SocketAddr;

use crate::{
    errors::{JsonBody, Result},
    handlers::AppState,
    models::{FeedbackEntry, MessageResponse},
    utils::net::{client_ip, request_id},
};

#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackEntry,
    responses(
        (status = 200, description = "Feedback stored", body = MessageResponse),
        (status = 422, description = "Malformed request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Feedback log unreadable", body = crate::errors::ErrorBody)
    ),
    tag = "feedback"
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    JsonBody(mut entry): JsonBody<FeedbackEntry>,
) -> Result<Json<MessageResponse>> {
    if entry.request_id.is_none() {
        entry.request_id = request_id(&headers);
    }
    if entry.client_ip.is_none() {
        entry.client_ip = client_ip(&headers, peer.map(|ConnectInfo(addr)| addr));
    }

    let total = state.feedback.append(entry).await?;
    tracing::info!("Feedback stored ({} entries)", total);

    Ok(Json(MessageResponse {
        message: "Feedback submitted successfully".to_string(),
    }))
}
