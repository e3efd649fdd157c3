use axum::response::Json;

use crate::{
    errors::JsonBody,
    models::{PostRequest, PostResponse},
};

/// Publishing is not wired to any platform yet: every requested platform
/// simply echoes the submitted content.
#[utoipa::path(
    post,
    path = "/api/post",
    request_body = PostRequest,
    responses(
        (status = 200, description = "Content per platform", body = PostResponse),
        (status = 422, description = "Malformed request body", body = crate::errors::ErrorBody)
    ),
    tag = "posts"
)]
pub async fn create_posts(JsonBody(request): JsonBody<PostRequest>) -> Json<PostResponse> {
    let posts = request
        .platforms
        .into_iter()
        .map(|platform| (platform, request.content.clone()))
        .collect();

    Json(PostResponse {
        success: true,
        posts,
        errors: None,
    })
}
