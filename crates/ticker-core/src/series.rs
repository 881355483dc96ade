// File: crates/ticker-core/src/series.rs
// Summary: Close-price series model, missing-sample filtering and render windows.
// Notes:
// - Values and timestamps are kept as parallel vectors, matching how price
//   providers deliver them. `None` marks a missing sample.

use crate::error::{Error, Result};

/// One sample of a series. `value` is `None` when the provider had no close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricePoint {
    pub value: Option<f64>,
    pub timestamp: i64,
}

/// Raw close prices, oldest first, paired 1:1 by index with timestamps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<Option<f64>>,
    timestamps: Vec<i64>,
}

impl Series {
    /// Build a series from parallel vectors; lengths must match.
    pub fn try_new(values: Vec<Option<f64>>, timestamps: Vec<i64>) -> Result<Self> {
        if values.len() != timestamps.len() {
            return Err(Error::LengthMismatch { values: values.len(), timestamps: timestamps.len() });
        }
        Ok(Self { values, timestamps })
    }

    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Self {
        let (values, timestamps) = points.into_iter().map(|p| (p.value, p.timestamp)).unzip();
        Self { values, timestamps }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn values(&self) -> &[Option<f64>] { &self.values }
    pub fn timestamps(&self) -> &[i64] { &self.timestamps }

    pub fn points(&self) -> impl Iterator<Item = PricePoint> + '_ {
        self.values
            .iter()
            .zip(&self.timestamps)
            .map(|(&value, &timestamp)| PricePoint { value, timestamp })
    }

    /// Drop every missing sample, keeping order and timestamp pairing.
    /// NaN closes count as missing.
    pub fn sanitize(&self) -> SanitizedSeries {
        let mut values = Vec::with_capacity(self.len());
        let mut timestamps = Vec::with_capacity(self.len());
        for (v, &t) in self.values.iter().zip(&self.timestamps) {
            if let Some(v) = (*v).filter(|x| !x.is_nan()) {
                values.push(v);
                timestamps.push(t);
            }
        }
        SanitizedSeries { values, timestamps }
    }
}

/// A series with no missing samples left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SanitizedSeries {
    values: Vec<f64>,
    timestamps: Vec<i64>,
}

impl SanitizedSeries {
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn timestamps(&self) -> &[i64] { &self.timestamps }

    /// Most recent close and its timestamp.
    pub fn last(&self) -> Option<(f64, i64)> {
        Some((*self.values.last()?, *self.timestamps.last()?))
    }

    /// The close before the most recent one.
    pub fn second_to_last(&self) -> Option<f64> {
        self.values.len().checked_sub(2).map(|i| self.values[i])
    }

    /// The trailing `count` closes (all of them when fewer exist).
    pub fn tail(&self, count: usize) -> &[f64] {
        &self.values[self.values.len().saturating_sub(count)..]
    }
}

/// Number of most-recent sanitized points drawn in one pass.
/// Invariant: `0 < count <= series length` and `count <= surface width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderWindow {
    count: usize,
}

impl RenderWindow {
    /// Clamp a requested count to what the series and surface can hold.
    /// Returns `None` when nothing can be drawn (empty series or zero width).
    pub fn fit(requested: usize, series_len: usize, width: u32) -> Option<Self> {
        let count = requested.min(series_len).min(width as usize);
        (count > 0).then_some(Self { count })
    }

    pub fn count(&self) -> usize { self.count }
}
