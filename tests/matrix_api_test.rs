#![cfg(feature = "matrix")]

use netlab::api::matrix::{router, MatrixState};
use netlab::domain::model::MatrixPair;
use serde_json::{json, Value};

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(MatrixState::new(MatrixPair::builtin()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn get_json(base: &str, path: &str) -> Value {
    reqwest::get(format!("{}{}", base, path))
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn add_returns_elementwise_sum() {
    let base = spawn_server().await;
    assert_eq!(get_json(&base, "/add").await, json!([[6, 8], [10, 12]]));
}

#[tokio::test]
async fn subtract_returns_elementwise_difference() {
    let base = spawn_server().await;
    assert_eq!(
        get_json(&base, "/subtract").await,
        json!([[-4, -4], [-4, -4]])
    );
}

#[tokio::test]
async fn multiply_returns_matrix_product() {
    let base = spawn_server().await;
    assert_eq!(
        get_json(&base, "/multiply").await,
        json!([[19, 22], [43, 50]])
    );
}

#[tokio::test]
async fn transpose_flips_rows_and_columns() {
    let base = spawn_server().await;
    assert_eq!(get_json(&base, "/transpose").await, json!([[1, 3], [2, 4]]));
}

#[tokio::test]
async fn determinant_is_exact_integer() {
    let base = spawn_server().await;
    assert_eq!(
        get_json(&base, "/determinant").await,
        json!({ "determinant": -2 })
    );
}

#[tokio::test]
async fn inverse_returns_float_matrix() {
    let base = spawn_server().await;
    assert_eq!(
        get_json(&base, "/inverse").await,
        json!([[-2.0, 1.0], [1.5, -0.5]])
    );
}

#[tokio::test]
async fn descriptor_lists_matrices_and_routes() {
    let base = spawn_server().await;
    let body = get_json(&base, "/").await;

    assert_eq!(body["matrix_A"], json!([[1, 2], [3, 4]]));
    assert_eq!(body["matrix_B"], json!([[5, 6], [7, 8]]));
    assert!(body["message"].is_string());

    let routes: Vec<&str> = body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap())
        .collect();
    assert_eq!(
        routes,
        ["/add", "/subtract", "/multiply", "/transpose", "/determinant", "/inverse"]
    );
}

#[tokio::test]
async fn matrix_routes_are_idempotent() {
    let base = spawn_server().await;

    for path in ["/add", "/multiply", "/inverse", "/determinant"] {
        let first = get_json(&base, path).await;
        let second = get_json(&base, path).await;
        assert_eq!(first, second, "{} changed between calls", path);
    }
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let base = spawn_server().await;
    let body = get_json(&base, "/health").await;

    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}
