use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Local;

use crate::{errors::AppError, handlers::AppState};

/// Enforces the daily request cap in front of the API routes.
pub async fn quota_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let policy = &state.config.quota;
    if !policy.enabled {
        return Ok(next.run(request).await);
    }

    let today = Local::now().date_naive();
    tracing::debug!("Processing request for date: {}", today);

    match state.usage.increment_and_check(today, policy.daily_limit).await {
        Ok(decision) if decision.allowed => {
            tracing::debug!("Request count after increment: {}", decision.request_count);
            Ok(next.run(request).await)
        }
        Ok(decision) => {
            tracing::warn!(
                "Daily limit exceeded: {} >= {}",
                decision.request_count,
                policy.daily_limit
            );
            state.metrics.record_quota_rejection();
            Ok(quota_exceeded_response(policy.permissive_cors))
        }
        Err(e) if policy.fail_open => {
            tracing::warn!("Usage store unavailable, admitting request uncounted: {}", e);
            Ok(next.run(request).await)
        }
        Err(e) => Err(e.into()),
    }
}

fn quota_exceeded_response(permissive_cors: bool) -> Response {
    let mut response = AppError::QuotaExceeded.into_response();

    if permissive_cors {
        let headers = response.headers_mut();
        let any = HeaderValue::from_static("*");
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, any.clone());
        headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, any.clone());
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, any);
    }

    response
}
