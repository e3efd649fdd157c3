use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::root,
        crate::handlers::posts::create_posts,
        crate::handlers::platforms::list_platforms,
        crate::handlers::format::format_for_platform,
        crate::handlers::content::refine,
        crate::handlers::content::generate,
        crate::handlers::feedback::submit_feedback,
        crate::handlers::usage::get_usage,
    ),
    components(
        schemas(
            crate::errors::ErrorBody,
            crate::models::PlatformDescriptor,
            crate::handlers::platforms::PlatformList,
            crate::models::PostRequest,
            crate::models::PostResponse,
            crate::models::FormatRequest,
            crate::models::FormattedPost,
            crate::models::ContentOnly,
            crate::models::RefineRequest,
            crate::models::RefineResponse,
            crate::models::GenerateRequest,
            crate::models::GenerateResponse,
            crate::models::FeedbackEntry,
            crate::models::MessageResponse,
            crate::models::UsageResponse,
        )
    ),
    tags(
        (name = "format", description = "Per-platform formatting"),
        (name = "content", description = "Model-backed refine and generate"),
        (name = "posts", description = "Publishing stub"),
        (name = "platforms", description = "Platform catalog"),
        (name = "feedback", description = "User feedback"),
        (name = "usage", description = "Daily quota usage"),
        (name = "health", description = "Liveness")
    ),
    info(
        title = "Social Media Post API",
        version = "0.1.0",
        description = "Formats, refines and generates social media posts with a hosted text model"
    )
)]
pub struct ApiDoc;

pub fn create_docs_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
