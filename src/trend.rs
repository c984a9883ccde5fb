//! Polynomial trend fitting, removal, and reconstruction.
//!
//! Fits a least-squares polynomial of a given order against the time index of
//! each sample in a batch, and evaluates the fitted polynomial at arbitrary
//! indices to remove or restore the trend. Because `remove_trend` and
//! `add_trend` share the same coefficients and evaluation path, removing and
//! re-adding a trend reproduces the input exactly.

use crate::error::{Result, TransformError};
use crate::validation::{check_batch, validate_time_index};
use nalgebra::DMatrix;

/// Fit a least-squares polynomial of the given order to each sample.
///
/// Every sample is fitted separately against the implicit `0..n_obs` time
/// index. Order zero is a special-cased per-sample mean; higher orders solve
/// all samples simultaneously through one SVD of the shared Vandermonde
/// design matrix, each sample occupying one right-hand-side column.
///
/// # Arguments
/// * `x` - Batch of samples, each with the same number of observations
/// * `order` - Polynomial order: zero is constant (mean), one is linear, etc.
///
/// # Returns
/// One coefficient row per sample, `order + 1` wide, highest-degree term
/// first (Vandermonde convention).
pub fn fit_trend(x: &[Vec<f64>], order: usize) -> Result<Vec<Vec<f64>>> {
    let (n_samples, n_obs) = check_batch(x)?;

    if order == 0 {
        return Ok(x
            .iter()
            .map(|s| vec![s.iter().sum::<f64>() / n_obs as f64])
            .collect());
    }

    if n_obs < order + 1 {
        return Err(TransformError::InsufficientData {
            needed: order + 1,
            got: n_obs,
        });
    }

    let index: Vec<i64> = (0..n_obs as i64).collect();
    let design = vandermonde(&index, order);

    // Samples in columns, matching the design matrix rows.
    let rhs = DMatrix::from_fn(n_obs, n_samples, |i, j| x[j][i]);

    let svd = design.svd(true, true);
    let coefs = svd
        .solve(&rhs, 1e-12)
        .map_err(|e| TransformError::ComputationError(e.to_string()))?;

    // Back to samples in rows.
    Ok((0..n_samples)
        .map(|j| (0..=order).map(|k| coefs[(k, j)]).collect())
        .collect())
}

/// Remove a fitted trend from each sample.
///
/// The polynomial order is inferred from the coefficient row width, which is
/// always `order + 1`. When no time index is given, the `0..n_obs` range
/// index used for fitting is assumed.
///
/// # Errors
/// `DimensionMismatch` when the coefficient rows do not match the batch, or
/// when an explicit index length differs from the sample length.
pub fn remove_trend(
    x: &[Vec<f64>],
    coefs: &[Vec<f64>],
    time_index: Option<&[i64]>,
) -> Result<Vec<Vec<f64>>> {
    apply_trend(x, coefs, time_index, -1.0)
}

/// Add a fitted trend back onto each sample; exact inverse of
/// [`remove_trend`].
///
/// Evaluates the same polynomial basis at the same index, so
/// `add_trend(remove_trend(x, c, idx)?, c, idx)? == x` holds exactly.
pub fn add_trend(
    x: &[Vec<f64>],
    coefs: &[Vec<f64>],
    time_index: Option<&[i64]>,
) -> Result<Vec<Vec<f64>>> {
    apply_trend(x, coefs, time_index, 1.0)
}

/// Compute the OLS slope of a single series against its 0-based index.
///
/// Closed-form computation, no solver involved; used as a lightweight
/// feature extractor. Returns zero for series shorter than two points.
pub fn time_series_slope(y: &[f64]) -> f64 {
    let n = y.len();
    if n < 2 {
        return 0.0;
    }

    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = y.iter().sum::<f64>() / nf;
    let xy_mean = y.iter().enumerate().map(|(i, &v)| i as f64 * v).sum::<f64>() / nf;
    let x2_mean = (0..n).map(|i| (i * i) as f64).sum::<f64>() / nf;

    (xy_mean - x_mean * y_mean) / (x2_mean - x_mean * x_mean)
}

/// Vandermonde design matrix with decreasing powers: column `k` holds
/// `t^(order - k)`.
fn vandermonde(index: &[i64], order: usize) -> DMatrix<f64> {
    DMatrix::from_fn(index.len(), order + 1, |i, k| {
        (index[i] as f64).powi((order - k) as i32)
    })
}

/// Validate coefficient rows against the batch and return the inferred order.
fn check_coefs(coefs: &[Vec<f64>], n_samples: usize) -> Result<usize> {
    if coefs.len() != n_samples {
        return Err(TransformError::DimensionMismatch {
            expected: n_samples,
            got: coefs.len(),
        });
    }

    let width = coefs[0].len();
    if width == 0 {
        return Err(TransformError::EmptyData);
    }

    for c in coefs.iter().skip(1) {
        if c.len() != width {
            return Err(TransformError::DimensionMismatch {
                expected: width,
                got: c.len(),
            });
        }
    }

    Ok(width - 1)
}

/// Shared evaluation path for trend removal (`sign = -1`) and restoration
/// (`sign = +1`).
fn apply_trend(
    x: &[Vec<f64>],
    coefs: &[Vec<f64>],
    time_index: Option<&[i64]>,
    sign: f64,
) -> Result<Vec<Vec<f64>>> {
    let (n_samples, n_obs) = check_batch(x)?;
    let order = check_coefs(coefs, n_samples)?;

    if let Some(index) = time_index {
        validate_time_index(index, n_obs)?;
    }

    // Order zero adjusts by the stored mean; no basis evaluation needed.
    if order == 0 {
        return Ok(x
            .iter()
            .zip(coefs)
            .map(|(s, c)| s.iter().map(|&v| v + sign * c[0]).collect())
            .collect());
    }

    let range_index: Vec<i64>;
    let index: &[i64] = match time_index {
        Some(idx) => idx,
        None => {
            range_index = (0..n_obs as i64).collect();
            &range_index
        }
    };

    Ok(x.iter()
        .zip(coefs)
        .map(|(s, c)| {
            s.iter()
                .zip(index)
                .map(|(&v, &t)| v + sign * eval_poly(c, t as f64))
                .collect()
        })
        .collect())
}

/// Evaluate a decreasing-powers polynomial at `t` via Horner's scheme.
fn eval_poly(coefs: &[f64], t: f64) -> f64 {
    coefs.iter().fold(0.0, |acc, &c| acc * t + c)
}
