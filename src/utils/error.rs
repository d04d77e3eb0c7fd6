use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "weather")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    #[error("Unsupported matrix shape: {rows}x{cols}")]
    UnsupportedShape { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
