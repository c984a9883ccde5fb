//! Input validation shared by the transform modules.
//!
//! Every public operation validates its inputs here before touching the data,
//! so shape and index errors surface with a precise message instead of a
//! panic deep inside the numerics.

use crate::error::{Result, TransformError};

/// Validate a batch of time series samples.
///
/// A valid batch is non-empty and rectangular: every sample has the same,
/// non-zero number of observations.
///
/// # Returns
/// `(n_samples, n_obs)` on success.
pub fn check_batch(x: &[Vec<f64>]) -> Result<(usize, usize)> {
    if x.is_empty() {
        return Err(TransformError::EmptyData);
    }

    let n_obs = x[0].len();
    if n_obs == 0 {
        return Err(TransformError::EmptyData);
    }

    for sample in x.iter().skip(1) {
        if sample.len() != n_obs {
            return Err(TransformError::DimensionMismatch {
                expected: n_obs,
                got: sample.len(),
            });
        }
    }

    Ok((x.len(), n_obs))
}

/// Validate a time index against an expected number of observations.
///
/// The index must have exactly `n_obs` positions and be strictly increasing.
pub fn validate_time_index(index: &[i64], n_obs: usize) -> Result<()> {
    if index.len() != n_obs {
        return Err(TransformError::DimensionMismatch {
            expected: n_obs,
            got: index.len(),
        });
    }

    if index.windows(2).any(|w| w[0] >= w[1]) {
        return Err(TransformError::InvalidIndex(
            "index must be strictly increasing".to_string(),
        ));
    }

    Ok(())
}

/// Validate a forecasting horizon.
///
/// A valid horizon is a non-empty sequence of positive step-ahead offsets.
pub fn validate_fh(fh: &[usize]) -> Result<()> {
    if fh.is_empty() {
        return Err(TransformError::InvalidHorizon(
            "horizon must not be empty".to_string(),
        ));
    }

    if fh.iter().any(|&h| h == 0) {
        return Err(TransformError::InvalidHorizon(
            "horizon offsets must be positive".to_string(),
        ));
    }

    Ok(())
}
