// Domain layer: models and ports. No HTTP or driver types here.

pub mod model;

#[cfg(feature = "weather")]
pub mod ports;
