use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::error::ApiResult;
use crate::domain::model::Observation;
use crate::domain::ports::ObservationSink;

pub const BANNER: &str = "Weather ingest service (network adapters lab)";

#[derive(Clone)]
pub struct WeatherState {
    sink: Arc<dyn ObservationSink>,
    observation: Observation,
}

impl WeatherState {
    pub fn new(sink: Arc<dyn ObservationSink>, observation: Observation) -> Self {
        Self { sink, observation }
    }
}

async fn banner() -> &'static str {
    BANNER
}

/// One fixed row per call. The caller supplies nothing; sink failures
/// surface as a 500 with the driver error attached.
async fn insert_data(State(state): State<WeatherState>) -> ApiResult<&'static str> {
    tracing::info!(
        city = %state.observation.city,
        temp = state.observation.temp,
        "inserting observation"
    );
    state.sink.insert(&state.observation).await?;
    Ok("Data Inserted Successfully!")
}

pub fn router(state: WeatherState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/insert_data", get(insert_data))
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
