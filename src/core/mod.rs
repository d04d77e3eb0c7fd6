#[cfg(feature = "matrix")]
pub mod linalg;
