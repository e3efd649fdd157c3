use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::{
    errors::{JsonBody, Result},
    handlers::AppState,
    models::{FormatOutcome, FormatRequest},
};

/// `bluetick`, `bluesky`, `truthsocial`, `linkedin` and `x` have dedicated
/// formatters; any other name goes through the generic one.
#[utoipa::path(
    post,
    path = "/api/format/{platform}",
    params(("platform" = String, Path, description = "Target platform id")),
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Formatted content (`x` returns only `content`)", body = crate::models::FormattedPost),
        (status = 429, description = "Daily quota exhausted", body = crate::errors::ErrorBody),
        (status = 422, description = "Malformed request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Model call failed", body = crate::errors::ErrorBody)
    ),
    tag = "format"
)]
pub async fn format_for_platform(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    JsonBody(request): JsonBody<FormatRequest>,
) -> Result<Json<FormatOutcome>> {
    let outcome = state.formatter.format(&platform, &request.content).await?;
    Ok(Json(outcome))
}
