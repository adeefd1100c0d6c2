use crate::{PcSetError, Result};

/// Pearson product-moment correlation coefficient of two equal-length series.
///
/// Uses the single-pass form
/// `(Σxy − ΣxΣy/n) / sqrt((Σx² − (Σx)²/n)(Σy² − (Σy)²/n))`. A series with zero
/// variance (or empty input) produces `NaN` rather than an error.
pub fn pearson<X, Y>(x: &[X], y: &[Y]) -> Result<f64>
where
    X: Copy + Into<f64>,
    Y: Copy + Into<f64>,
{
    if x.len() != y.len() {
        return Err(PcSetError::invalid_argument(format!(
            "pearson: series must be the same length (got {} and {})",
            x.len(),
            y.len()
        )));
    }

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;

    for (&a, &b) in x.iter().zip(y) {
        let a: f64 = a.into();
        let b: f64 = b.into();
        sum_x += a;
        sum_y += b;
        sum_xx += a * a;
        sum_yy += b * b;
        sum_xy += a * b;
    }

    let numerator = sum_xy - (sum_x * sum_y) / n;
    let denominator = ((sum_xx - (sum_x * sum_x) / n) * (sum_yy - (sum_y * sum_y) / n)).sqrt();
    Ok(numerator / denominator)
}
