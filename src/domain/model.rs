#[cfg(feature = "matrix")]
use ndarray::{array, Array2};
#[cfg(feature = "weather")]
use serde::{Deserialize, Serialize};

/// The two matrices every linear-algebra route operates on. Initialized once
/// at startup, never mutated. Always 2x2.
#[cfg(feature = "matrix")]
#[derive(Debug, Clone)]
pub struct MatrixPair {
    pub a: Array2<i64>,
    pub b: Array2<i64>,
}

#[cfg(feature = "matrix")]
impl MatrixPair {
    pub fn builtin() -> Self {
        Self {
            a: array![[1, 2], [3, 4]],
            b: array![[5, 6], [7, 8]],
        }
    }
}

/// One row of the external `users` table.
#[cfg(feature = "weather")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub city: String,
    pub temp: i32,
}
