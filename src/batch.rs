//! Batch container for equal-length time series samples.
//!
//! A [`Batch`] couples a rectangular set of samples with the integer time
//! index they are observed on. Transforms that must align fitted state to a
//! batch's own index (see [`crate::seasonal`]) operate on this container;
//! the trend functions accept raw sample slices instead.

use crate::error::{Result, TransformError};
use crate::validation::{check_batch, validate_time_index};

/// An ordered collection of equal-length samples sharing one time index.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    samples: Vec<Vec<f64>>,
    index: Vec<i64>,
}

impl Batch {
    /// Create a batch with the default `0..n_obs` range index.
    ///
    /// # Errors
    /// `EmptyData` for an empty batch or empty samples, `DimensionMismatch`
    /// for a ragged batch.
    pub fn new(samples: Vec<Vec<f64>>) -> Result<Self> {
        let (_, n_obs) = check_batch(&samples)?;
        let index = (0..n_obs as i64).collect();
        Ok(Self { samples, index })
    }

    /// Create a batch observed on an explicit time index.
    ///
    /// The index must be strictly increasing and match the sample length.
    pub fn with_index(samples: Vec<Vec<f64>>, index: Vec<i64>) -> Result<Self> {
        let (_, n_obs) = check_batch(&samples)?;
        validate_time_index(&index, n_obs)?;
        Ok(Self { samples, index })
    }

    /// Number of samples in the batch.
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Number of observations per sample.
    pub fn n_obs(&self) -> usize {
        self.index.len()
    }

    /// The samples, one row per series.
    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    /// The shared time index.
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Select the observations at the given time positions, in the given
    /// order, returning a new batch indexed by `times`.
    ///
    /// # Errors
    /// `InvalidIndex` if any requested position is not present in the index.
    pub fn select_times(&self, times: &[i64]) -> Result<Batch> {
        let mut positions = Vec::with_capacity(times.len());
        for &t in times {
            match self.index.binary_search(&t) {
                Ok(pos) => positions.push(pos),
                Err(_) => {
                    return Err(TransformError::InvalidIndex(format!(
                        "time {} not present in index",
                        t
                    )))
                }
            }
        }

        let samples = self
            .samples
            .iter()
            .map(|s| positions.iter().map(|&p| s[p]).collect())
            .collect();

        Batch::with_index(samples, times.to_vec())
    }

    /// Tabular view of the batch: one row per sample, one column per
    /// observation, the index dropped.
    pub fn to_tabular(&self) -> Vec<Vec<f64>> {
        self.samples.clone()
    }

    /// Build a batch from a tabular array, assuming a range index.
    pub fn from_tabular(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}
