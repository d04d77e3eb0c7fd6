pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "weather")]
pub mod adapters;

#[cfg(feature = "matrix")]
pub use domain::model::MatrixPair;

#[cfg(feature = "weather")]
pub use adapters::mysql::MySqlObservationSink;
#[cfg(feature = "weather")]
pub use domain::{model::Observation, ports::ObservationSink};

pub use utils::error::{Result, ServiceError};
