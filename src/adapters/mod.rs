// Adapters layer: concrete implementations behind the domain ports.

pub mod mysql;

pub use mysql::MySqlObservationSink;
