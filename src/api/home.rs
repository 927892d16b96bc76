//! Service status endpoint

use axum::Json;

use crate::models::book::MessageResponse;

/// Check that the API is up
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    )
)]
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Library REST API is running"))
}
