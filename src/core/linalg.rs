use crate::utils::error::{Result, ServiceError};
use ndarray::{array, Array2};

pub fn add(a: &Array2<i64>, b: &Array2<i64>) -> Array2<i64> {
    a + b
}

pub fn subtract(a: &Array2<i64>, b: &Array2<i64>) -> Array2<i64> {
    a - b
}

/// Matrix product A·B.
pub fn multiply(a: &Array2<i64>, b: &Array2<i64>) -> Array2<i64> {
    a.dot(b)
}

pub fn transpose(a: &Array2<i64>) -> Array2<i64> {
    a.t().to_owned()
}

/// 2x2 closed form. Integer input keeps the result exact.
pub fn determinant(a: &Array2<i64>) -> Result<i64> {
    ensure_2x2(a)?;
    Ok(a[[0, 0]] * a[[1, 1]] - a[[0, 1]] * a[[1, 0]])
}

/// 2x2 closed form: swap the diagonal, negate the off-diagonal, divide by the
/// determinant.
pub fn inverse(a: &Array2<i64>) -> Result<Array2<f64>> {
    let det = determinant(a)?;
    if det == 0 {
        return Err(ServiceError::SingularMatrix);
    }

    let det = det as f64;
    Ok(array![
        [a[[1, 1]] as f64 / det, -(a[[0, 1]] as f64) / det],
        [-(a[[1, 0]] as f64) / det, a[[0, 0]] as f64 / det],
    ])
}

fn ensure_2x2(a: &Array2<i64>) -> Result<()> {
    let (rows, cols) = a.dim();
    if (rows, cols) != (2, 2) {
        return Err(ServiceError::UnsupportedShape { rows, cols });
    }
    Ok(())
}
