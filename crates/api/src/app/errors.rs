use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_store::InventoryError;

pub fn inventory_error_to_response(err: InventoryError) -> axum::response::Response {
    match err {
        InventoryError::AlreadyExists => {
            json_error(StatusCode::CONFLICT, "already_exists", "item already exists")
        }
        InventoryError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        InventoryError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        InventoryError::Store(e) => {
            tracing::error!(error = %e, "store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
