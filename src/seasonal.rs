//! Deseasonalising transform with out-of-sample index alignment.
//!
//! [`fit_seasonal`] estimates one fixed-length seasonal pattern per sample
//! and returns an immutable [`SeasonalFit`]. The fitted value aligns its
//! patterns to any batch's time index by modulo arithmetic, so forecasts
//! living on an index far beyond the fitted range reseasonalise correctly.
//!
//! # Example
//!
//! ```
//! use ts_transform::batch::Batch;
//! use ts_transform::seasonal::{fit_seasonal, SeasonalModel};
//!
//! let series: Vec<f64> = (0..48)
//!     .map(|i| 20.0 + [3.0, -1.0, 0.5, -2.5][i % 4])
//!     .collect();
//! let batch = Batch::new(vec![series]).unwrap();
//!
//! let fitted = fit_seasonal(&batch, 4, SeasonalModel::Additive).unwrap();
//! let deseasonalised = fitted.transform(&batch).unwrap();
//! let restored = fitted.inverse_transform(&deseasonalised).unwrap();
//!
//! assert!((restored.samples()[0][0] - batch.samples()[0][0]).abs() < 1e-9);
//! ```

use crate::batch::Batch;
use crate::error::{Result, TransformError};
use crate::trend::fit_trend;
use crate::validation::validate_time_index;
use std::str::FromStr;

/// Seasonal interaction model: how the seasonal component combines with the
/// rest of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonalModel {
    /// Seasonality is added to the series; removal subtracts it.
    #[default]
    Additive,
    /// Seasonality scales the series; removal divides by it.
    Multiplicative,
}

impl SeasonalModel {
    /// Neutral seasonal value: removing or restoring it changes nothing.
    fn neutral(self) -> f64 {
        match self {
            SeasonalModel::Additive => 0.0,
            SeasonalModel::Multiplicative => 1.0,
        }
    }
}

impl FromStr for SeasonalModel {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "additive" | "add" => Ok(Self::Additive),
            "multiplicative" | "mult" | "mul" => Ok(Self::Multiplicative),
            other => Err(TransformError::InvalidParameter(format!(
                "unknown seasonal model '{}'",
                other
            ))),
        }
    }
}

/// Immutable fitted seasonal state: one `sp`-length pattern per sample.
///
/// Constructed by [`fit_seasonal`]; all methods are read-only, so a fit can
/// be shared freely across threads. Re-fitting means constructing a new
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalFit {
    components: Vec<Vec<f64>>,
    sp: usize,
    model: SeasonalModel,
}

/// Estimate seasonal components from a batch.
///
/// For `sp <= 1` the fit records empty components and both transforms act as
/// the exact identity. Otherwise each sample is linearly detrended first to
/// isolate seasonality from drift, the detrended values (differences for
/// additive, ratios for multiplicative) are averaged by index position
/// modulo `sp`, and the resulting pattern is stored per sample in batch
/// order. Phases never observed fall back to the model's neutral value.
///
/// Multiplicative fitting assumes strictly positive data; a fitted trend
/// crossing zero makes the ratios unbounded.
///
/// # Errors
/// `InsufficientData` when `sp > 1` and fewer than two observations are
/// available for the linear pre-detrend; `DegenerateSeasonal` when a
/// multiplicative component lands at numerical zero.
pub fn fit_seasonal(batch: &Batch, sp: usize, model: SeasonalModel) -> Result<SeasonalFit> {
    if sp <= 1 {
        return Ok(SeasonalFit {
            components: vec![Vec::new(); batch.n_samples()],
            sp,
            model,
        });
    }

    let n_obs = batch.n_obs();
    if n_obs < 2 {
        return Err(TransformError::InsufficientData {
            needed: 2,
            got: n_obs,
        });
    }

    // Linear pre-detrend on the same range positions fit_trend uses.
    let coefs = fit_trend(batch.samples(), 1)?;

    let mut components = Vec::with_capacity(batch.n_samples());
    for (sample, c) in batch.samples().iter().zip(&coefs) {
        let mut sums = vec![0.0; sp];
        let mut counts = vec![0usize; sp];

        for (pos, &v) in sample.iter().enumerate() {
            let trend = c[0] * pos as f64 + c[1];
            let detrended = match model {
                SeasonalModel::Additive => v - trend,
                SeasonalModel::Multiplicative => v / trend,
            };

            let phase = phase_of(batch.index()[pos], sp);
            sums[phase] += detrended;
            counts[phase] += 1;
        }

        let pattern: Vec<f64> = sums
            .iter()
            .zip(&counts)
            .map(|(&s, &n)| if n == 0 { model.neutral() } else { s / n as f64 })
            .collect();

        if model == SeasonalModel::Multiplicative && pattern.iter().any(|v| v.abs() < 1e-12) {
            return Err(TransformError::DegenerateSeasonal);
        }

        components.push(pattern);
    }

    Ok(SeasonalFit {
        components,
        sp,
        model,
    })
}

impl SeasonalFit {
    /// Seasonal periodicity the fit was estimated with.
    pub fn sp(&self) -> usize {
        self.sp
    }

    /// Seasonal interaction model.
    pub fn model(&self) -> SeasonalModel {
        self.model
    }

    /// Fitted seasonal patterns, one per sample, each `sp` long (empty for
    /// `sp <= 1`).
    pub fn components(&self) -> &[Vec<f64>] {
        &self.components
    }

    /// Align the stored patterns to an arbitrary ordered index.
    ///
    /// For every position `p` in `index` the aligned value is the stored
    /// component at phase `p mod sp`; alignment depends only on the
    /// positions themselves, never on where the fitting data started, and
    /// the index need not be contiguous. Runs in O(len(index)) per sample.
    pub fn align_to_index(&self, index: &[i64]) -> Result<Vec<Vec<f64>>> {
        validate_time_index(index, index.len())?;

        if self.sp <= 1 {
            return Ok(vec![Vec::new(); self.components.len()]);
        }

        Ok(self
            .components
            .iter()
            .map(|pattern| {
                index
                    .iter()
                    .map(|&p| pattern[phase_of(p, self.sp)])
                    .collect()
            })
            .collect())
    }

    /// Remove the seasonal component from a batch, aligned to the batch's
    /// own time index.
    ///
    /// Exact identity for `sp <= 1`.
    pub fn transform(&self, batch: &Batch) -> Result<Batch> {
        self.apply(batch, true)
    }

    /// Restore the seasonal component onto a batch, aligned to the batch's
    /// own time index; inverse of [`SeasonalFit::transform`].
    ///
    /// The batch may live on any index, including one wholly beyond the
    /// fitted range, which is the forecast-reseasonalisation path.
    pub fn inverse_transform(&self, batch: &Batch) -> Result<Batch> {
        self.apply(batch, false)
    }

    fn apply(&self, batch: &Batch, remove: bool) -> Result<Batch> {
        if batch.n_samples() != self.components.len() {
            return Err(TransformError::DimensionMismatch {
                expected: self.components.len(),
                got: batch.n_samples(),
            });
        }

        if self.sp <= 1 {
            return Ok(batch.clone());
        }

        let aligned = self.align_to_index(batch.index())?;

        let samples = batch
            .samples()
            .iter()
            .zip(&aligned)
            .map(|(sample, season)| {
                sample
                    .iter()
                    .zip(season)
                    .map(|(&v, &s)| match (self.model, remove) {
                        (SeasonalModel::Additive, true) => v - s,
                        (SeasonalModel::Additive, false) => v + s,
                        (SeasonalModel::Multiplicative, true) => v / s,
                        (SeasonalModel::Multiplicative, false) => v * s,
                    })
                    .collect()
            })
            .collect();

        Batch::with_index(samples, batch.index().to_vec())
    }
}

/// Phase of a time position within the seasonal cycle. `rem_euclid` keeps
/// negative positions in `0..sp`.
fn phase_of(position: i64, sp: usize) -> usize {
    position.rem_euclid(sp as i64) as usize
}
