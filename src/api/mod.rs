pub mod error;

#[cfg(feature = "matrix")]
pub mod matrix;
#[cfg(feature = "weather")]
pub mod weather;

use axum::Json;
use serde::Serialize;

pub use error::{ApiError, ApiResult};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
