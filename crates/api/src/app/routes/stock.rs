use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn low_stock(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    // Lock needed even for a read: the low-stock view revalidates (and
    // rewrites) itself while it is being read.
    let mut manager = services.manager().lock().await;
    (StatusCode::OK, Json(manager.list_low_stock())).into_response()
}

pub async fn get_threshold(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let manager = services.manager().lock().await;
    (
        StatusCode::OK,
        Json(dto::ThresholdResponse {
            threshold: manager.threshold(),
        }),
    )
        .into_response()
}

pub async fn set_threshold(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SetThresholdRequest>,
) -> axum::response::Response {
    let mut manager = services.manager().lock().await;
    match manager.set_threshold(body.threshold).await {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::ThresholdResponse {
                threshold: manager.threshold(),
            }),
        )
            .into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}
