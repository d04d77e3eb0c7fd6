use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use ndarray::Array2;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::error::ApiResult;
use crate::core::linalg;
use crate::domain::model::MatrixPair;

pub const ROUTES: [&str; 6] = [
    "/add",
    "/subtract",
    "/multiply",
    "/transpose",
    "/determinant",
    "/inverse",
];

/// Shared state: the fixed pair, read-only for the process lifetime.
#[derive(Clone)]
pub struct MatrixState {
    pair: Arc<MatrixPair>,
}

impl MatrixState {
    pub fn new(pair: MatrixPair) -> Self {
        Self {
            pair: Arc::new(pair),
        }
    }
}

#[derive(Serialize)]
pub struct DescriptorResponse {
    pub message: String,
    #[serde(rename = "matrix_A")]
    pub matrix_a: Vec<Vec<i64>>,
    #[serde(rename = "matrix_B")]
    pub matrix_b: Vec<Vec<i64>>,
    pub routes: Vec<String>,
}

#[derive(Serialize)]
pub struct DeterminantResponse {
    pub determinant: i64,
}

async fn descriptor(State(state): State<MatrixState>) -> Json<DescriptorResponse> {
    Json(DescriptorResponse {
        message: "Linear algebra over two fixed 2x2 matrices (port-forwarding lab)".to_string(),
        matrix_a: rows(&state.pair.a),
        matrix_b: rows(&state.pair.b),
        routes: ROUTES.iter().map(|r| r.to_string()).collect(),
    })
}

async fn add(State(state): State<MatrixState>) -> Json<Vec<Vec<i64>>> {
    Json(rows(&linalg::add(&state.pair.a, &state.pair.b)))
}

async fn subtract(State(state): State<MatrixState>) -> Json<Vec<Vec<i64>>> {
    Json(rows(&linalg::subtract(&state.pair.a, &state.pair.b)))
}

async fn multiply(State(state): State<MatrixState>) -> Json<Vec<Vec<i64>>> {
    Json(rows(&linalg::multiply(&state.pair.a, &state.pair.b)))
}

async fn transpose(State(state): State<MatrixState>) -> Json<Vec<Vec<i64>>> {
    Json(rows(&linalg::transpose(&state.pair.a)))
}

async fn determinant(State(state): State<MatrixState>) -> ApiResult<Json<DeterminantResponse>> {
    Ok(Json(DeterminantResponse {
        determinant: linalg::determinant(&state.pair.a)?,
    }))
}

async fn inverse(State(state): State<MatrixState>) -> ApiResult<Json<Vec<Vec<f64>>>> {
    Ok(Json(rows(&linalg::inverse(&state.pair.a)?)))
}

/// Row-major nested arrays, the shape callers expect in JSON.
fn rows<T: Copy>(m: &Array2<T>) -> Vec<Vec<T>> {
    m.outer_iter().map(|row| row.to_vec()).collect()
}

pub fn router(state: MatrixState) -> Router {
    Router::new()
        .route("/", get(descriptor))
        .route("/add", get(add))
        .route("/subtract", get(subtract))
        .route("/multiply", get(multiply))
        .route("/transpose", get(transpose))
        .route("/determinant", get(determinant))
        .route("/inverse", get(inverse))
        .route("/health", get(crate::api::health))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
