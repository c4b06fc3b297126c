use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let manager = services.manager().lock().await;
    (StatusCode::OK, Json(manager.list_all())).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let mut manager = services.manager().lock().await;
    match manager.add_item(&body.name, body.quantity, body.price).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    let mut manager = services.manager().lock().await;
    match manager.update_item(&name, body.quantity, body.price).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let mut manager = services.manager().lock().await;
    match manager.delete_item(&name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}

pub async fn search_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let manager = services.manager().lock().await;
    (StatusCode::OK, Json(manager.search(&params.q))).into_response()
}
