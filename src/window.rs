//! Rolling-window splitting for tabular supervised learning.
//!
//! Slides a fixed-length window across a series one step at a time, pairing
//! each input window with the observations a forecasting horizon ahead of
//! it. [`split_into_tabular_train_test`] stacks the windows into tabular
//! `(X, y)` arrays and reserves the trailing windows as a test set.

use crate::error::{Result, TransformError};
use crate::validation::{validate_fh, validate_time_index};

/// Rolling-window splitter configuration.
///
/// # Example
///
/// ```
/// use ts_transform::window::RollingWindowSplit;
///
/// let rw = RollingWindowSplit::new(Some(3), vec![1]).unwrap();
/// let index: Vec<i64> = (0..6).collect();
/// let windows: Vec<_> = rw.split(&index).unwrap().collect();
///
/// assert_eq!(windows.len(), 3);
/// assert_eq!(windows[0], (vec![0, 1, 2], vec![3]));
/// assert_eq!(windows[2], (vec![2, 3, 4], vec![5]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingWindowSplit {
    window_length: Option<usize>,
    fh: Vec<usize>,
}

impl RollingWindowSplit {
    /// Create a splitter.
    ///
    /// `window_length == None` means "as many points as available before the
    /// first horizon step", which yields exactly one window per series.
    ///
    /// # Errors
    /// `InvalidHorizon` for an empty horizon or zero offsets;
    /// `InvalidParameter` for a zero window length.
    pub fn new(window_length: Option<usize>, fh: Vec<usize>) -> Result<Self> {
        validate_fh(&fh)?;

        if window_length == Some(0) {
            return Err(TransformError::InvalidParameter(
                "window length must be positive".to_string(),
            ));
        }

        Ok(Self { window_length, fh })
    }

    /// Configured window length, if fixed.
    pub fn window_length(&self) -> Option<usize> {
        self.window_length
    }

    /// Forecasting horizon offsets.
    pub fn fh(&self) -> &[usize] {
        &self.fh
    }

    /// Lazily enumerate (input, output) position pairs over `index`.
    ///
    /// Each call recomputes the windows from scratch; iterators from
    /// separate calls are independent. Positions refer to offsets into
    /// `index`, input windows are `window_length` consecutive positions,
    /// and outputs are the positions `h - 1` past the window's end for each
    /// horizon offset `h`.
    ///
    /// For a series of length `n` and window length `w` this yields
    /// `n - w - max(fh) + 1` pairs.
    ///
    /// # Errors
    /// `InvalidIndex` for an unordered index; `InsufficientData` when not
    /// even one window fits.
    pub fn split(&self, index: &[i64]) -> Result<Windows> {
        validate_time_index(index, index.len())?;

        let n = index.len();
        let max_fh = self.fh.iter().copied().max().unwrap_or(0);
        let window_length = match self.window_length {
            Some(w) => w,
            None => n.saturating_sub(max_fh),
        };

        if window_length == 0 || n < window_length + max_fh {
            return Err(TransformError::InsufficientData {
                needed: window_length.max(1) + max_fh,
                got: n,
            });
        }

        Ok(Windows {
            window_length,
            fh: self.fh.clone(),
            max_fh,
            n,
            start: 0,
        })
    }
}

/// Iterator over (input positions, output positions) window pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Windows {
    window_length: usize,
    fh: Vec<usize>,
    max_fh: usize,
    n: usize,
    start: usize,
}

impl Iterator for Windows {
    type Item = (Vec<usize>, Vec<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.start + self.window_length + self.max_fh > self.n {
            return None;
        }

        let end = self.start + self.window_length;
        let input: Vec<usize> = (self.start..end).collect();
        let output: Vec<usize> = self.fh.iter().map(|&h| end - 1 + h).collect();

        self.start += 1;
        Some((input, output))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n + 1).saturating_sub(self.start + self.window_length + self.max_fh);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows {}

/// Tabular train/test arrays produced by [`split_into_tabular_train_test`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabularTrainTest {
    /// Training inputs, shape `(num_windows - test_size, window_length)`.
    pub x_train: Vec<Vec<f64>>,
    /// Training outputs, shape `(num_windows - test_size, fh.len())`.
    pub y_train: Vec<Vec<f64>>,
    /// Test inputs, the last `test_size` windows.
    pub x_test: Vec<Vec<f64>>,
    /// Test outputs, the last `test_size` windows.
    pub y_test: Vec<Vec<f64>>,
}

/// Split a single series into tabular train and test sets using the rolling
/// window approach.
///
/// Materialises every window over the series' range index, stacks inputs
/// into `(num_windows, window_length)` rows and outputs into
/// `(num_windows, fh.len())` rows, then reserves the trailing `test_size`
/// windows as the test set.
///
/// # Errors
/// Horizon and window errors as in [`RollingWindowSplit`];
/// `InvalidParameter` when `test_size` is zero or does not leave at least
/// one training window.
pub fn split_into_tabular_train_test(
    x: &[f64],
    window_length: Option<usize>,
    fh: &[usize],
    test_size: usize,
) -> Result<TabularTrainTest> {
    let rw = RollingWindowSplit::new(window_length, fh.to_vec())?;
    let index: Vec<i64> = (0..x.len() as i64).collect();

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (input, output) in rw.split(&index)? {
        xs.push(input.iter().map(|&p| x[p]).collect::<Vec<f64>>());
        ys.push(output.iter().map(|&p| x[p]).collect::<Vec<f64>>());
    }

    if test_size == 0 || test_size >= xs.len() {
        return Err(TransformError::InvalidParameter(format!(
            "test_size must be between 1 and {}, got {}",
            xs.len() - 1,
            test_size
        )));
    }

    let cut = xs.len() - test_size;
    let x_test = xs.split_off(cut);
    let y_test = ys.split_off(cut);

    Ok(TabularTrainTest {
        x_train: xs,
        y_train: ys,
        x_test,
        y_test,
    })
}
