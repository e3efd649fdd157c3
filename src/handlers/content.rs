use axum::{extract::State, response::Json};

use crate::{
    errors::{JsonBody, Result},
    handlers::AppState,
    models::{GenerateRequest, GenerateResponse, RefineRequest, RefineResponse},
};

#[utoipa::path(
    post,
    path = "/api/refine",
    request_body = RefineRequest,
    responses(
        (status = 200, description = "Rewritten post", body = RefineResponse),
        (status = 422, description = "Malformed request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Model call failed", body = crate::errors::ErrorBody)
    ),
    tag = "content"
)]
pub async fn refine(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RefineRequest>,
) -> Result<Json<RefineResponse>> {
    let refined_content = state
        .formatter
        .refine(&request.content, &request.instruction)
        .await?;

    Ok(Json(RefineResponse { refined_content }))
}

#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated post", body = GenerateResponse),
        (status = 422, description = "Malformed request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Model call failed", body = crate::errors::ErrorBody)
    ),
    tag = "content"
)]
pub async fn generate(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let generated_content = state.formatter.generate(&request.content).await?;

    Ok(Json(GenerateResponse {
        original_content: request.content,
        generated_content,
    }))
}
