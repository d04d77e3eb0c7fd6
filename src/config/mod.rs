pub mod cli;
pub mod file;

#[cfg(feature = "matrix")]
pub use cli::MatrixServerConfig;
#[cfg(feature = "weather")]
pub use cli::WeatherServerConfig;
pub use file::FileConfig;

/// Connection settings for the external observations database.
#[cfg(feature = "weather")]
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}
