use axum::{extract::State, response::Json};
use chrono::Local;

use crate::{errors::Result, handlers::AppState, models::UsageResponse};

#[utoipa::path(
    get,
    path = "/api/usage",
    responses((status = 200, description = "Requests counted today", body = UsageResponse)),
    tag = "usage"
)]
pub async fn get_usage(State(state): State<AppState>) -> Result<Json<UsageResponse>> {
    let today = Local::now().date_naive();
    let today_requests = state.usage.count_for(today).await?;

    Ok(Json(UsageResponse {
        today_requests,
        limit: state.config.quota.daily_limit,
    }))
}
