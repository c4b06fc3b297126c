use axum::{
    Router,
    routing::{get, put},
};

pub mod items;
pub mod stock;
pub mod system;

/// Full routing tree.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api", api_router())
}

fn api_router() -> Router {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:name",
            put(items::update_item).delete(items::delete_item),
        )
        .route("/search", get(items::search_items))
        .route("/low-stock", get(stock::low_stock))
        .route(
            "/threshold",
            get(stock::get_threshold).post(stock::set_threshold),
        )
}
