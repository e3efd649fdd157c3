//! HTTP API that reformats free-form text for social media platforms,
//! delegating rewrites to a hosted text model and enforcing an optional
//! daily request quota.

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

use handlers::{content, docs, feedback, format, health, metrics, platforms, posts, usage, AppState};
use middleware::{metrics_middleware, quota_middleware};

pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(health::root))
        .route("/api/post", post(posts::create_posts))
        .route("/api/platforms", get(platforms::list_platforms))
        .route("/api/format/:platform", post(format::format_for_platform))
        .route("/api/refine", post(content::refine))
        .route("/api/generate", post(content::generate))
        .route("/api/feedback", post(feedback::submit_feedback))
        .route("/api/usage", get(usage::get_usage))
        .layer(from_fn_with_state(state.clone(), quota_middleware));

    // Operational endpoints stay outside the quota
    let ops = Router::new()
        .route("/metrics", get(metrics::metrics_handler))
        .merge(docs::create_docs_router());

    api.merge(ops)
        .layer(from_fn_with_state(state.clone(), metrics_middleware))
        .layer(cors_layer(&state.config.allowed_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// `*` anywhere in the list allows every origin without credentials;
/// otherwise only the listed origins, with credentials.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
