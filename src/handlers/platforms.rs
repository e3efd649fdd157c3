use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{PlatformDescriptor, PLATFORMS};

#[derive(Debug, Serialize, ToSchema)]
pub struct PlatformList {
    pub platforms: Vec<PlatformDescriptor>,
}

#[utoipa::path(
    get,
    path = "/api/platforms",
    responses((status = 200, description = "Supported platforms", body = PlatformList)),
    tag = "platforms"
)]
pub async fn list_platforms() -> Json<PlatformList> {
    Json(PlatformList {
        platforms: PLATFORMS.to_vec(),
    })
}
