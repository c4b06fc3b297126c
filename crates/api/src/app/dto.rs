use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SetThresholdRequest {
    pub threshold: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ThresholdResponse {
    pub threshold: i64,
}
