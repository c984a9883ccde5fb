//! # ts-transform
//!
//! Reversible time series transformations for forecasting pipelines:
//! polynomial detrending, deseasonalising with out-of-sample index
//! alignment, and rolling-window tabularisation.
//!
//! A typical pipeline removes deterministic structure before modelling and
//! restores it when forecasting on new time indices: detrend and
//! deseasonalise the training data, fit a model on the residual, then
//! inverse-transform the forecast aligned to its own, later index.
//!
//! # Example
//!
//! ```
//! use ts_transform::prelude::*;
//!
//! // A trending series with a period-4 seasonal pattern.
//! let series: Vec<f64> = (0..48)
//!     .map(|i| 20.0 + 0.5 * i as f64 + [2.0, -1.0, 0.5, -1.5][i % 4])
//!     .collect();
//!
//! // Remove the linear trend.
//! let coefs = fit_trend(&[series.clone()], 1).unwrap();
//! let detrended = remove_trend(&[series.clone()], &coefs, None).unwrap();
//!
//! // Estimate and remove the seasonal pattern.
//! let batch = Batch::new(detrended).unwrap();
//! let seasonal = fit_seasonal(&batch, 4, SeasonalModel::Additive).unwrap();
//! let residual = seasonal.transform(&batch).unwrap();
//!
//! // Restore both on a forecast index beyond the training range.
//! let horizon: Vec<i64> = (48..52).collect();
//! let flat = Batch::with_index(vec![vec![0.0; 4]], horizon.clone()).unwrap();
//! let reseasonalised = seasonal.inverse_transform(&flat).unwrap();
//! let forecast = add_trend(
//!     reseasonalised.samples(),
//!     &coefs,
//!     Some(&horizon),
//! )
//! .unwrap();
//!
//! assert_eq!(forecast[0].len(), 4);
//! let _ = residual;
//! ```

pub mod batch;
pub mod error;
pub mod seasonal;
pub mod trend;
pub mod validation;
pub mod window;

pub use error::{Result, TransformError};

pub mod prelude {
    pub use crate::batch::Batch;
    pub use crate::error::{Result, TransformError};
    pub use crate::seasonal::{fit_seasonal, SeasonalFit, SeasonalModel};
    pub use crate::trend::{add_trend, fit_trend, remove_trend, time_series_slope};
    pub use crate::window::{
        split_into_tabular_train_test, RollingWindowSplit, TabularTrainTest, Windows,
    };
}
