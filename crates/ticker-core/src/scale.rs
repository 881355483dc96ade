// File: crates/ticker-core/src/scale.rs
// Summary: Index (X) and price (Y) scale factors for one render pass.

use crate::series::{RenderWindow, SanitizedSeries};
use crate::types::{SurfaceSize, LOOKBACK_FACTOR};

/// Scale factors and price range shared by every segment of a pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleContext {
    /// Pixel columns per sample.
    pub x_scale: f64,
    /// Fine pixel rows per unit of price. Zero for a flat series.
    pub y_scale: f64,
    pub min_price: f64,
    pub max_price: f64,
}

impl ScaleContext {
    /// Derive scales for drawing the trailing `window` samples of `series`.
    ///
    /// The price range is taken over `ceil(1.5 * n)` trailing samples (clamped
    /// to the series start) so the drawn line keeps some headroom. One text
    /// row of the surface is reserved for the header.
    pub fn compute(series: &SanitizedSeries, window: RenderWindow, size: SurfaceSize) -> Self {
        let n = window.count();
        let lookback = lookback_len(n);

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for &v in series.tail(lookback) {
            min_price = min_price.min(v);
            max_price = max_price.max(v);
        }

        let x_scale = size.width as f64 / n as f64;
        let span = max_price - min_price;
        let y_scale = if span > 0.0 && span.is_finite() {
            size.plot_height() as f64 / span
        } else {
            tracing::debug!(min_price, max_price, "flat price range, drawing a level line");
            0.0
        };

        Self { x_scale, y_scale, min_price, max_price }
    }

    /// Pixel column of the `i`-th sample in the window.
    #[inline]
    pub fn column(&self, i: usize) -> i32 {
        (i as f64 * self.x_scale).floor() as i32
    }

    /// Fine pixel row of `value`, below a header band of `header_offset` rows.
    /// Higher prices map to smaller rows.
    #[inline]
    pub fn row(&self, value: f64, header_offset: u32) -> i32 {
        ((self.max_price - value) * self.y_scale).floor() as i32 + header_offset as i32
    }
}

/// Samples scanned for min/max when drawing `n` of them.
pub fn lookback_len(n: usize) -> usize {
    (n as f64 * LOOKBACK_FACTOR).ceil() as usize
}
