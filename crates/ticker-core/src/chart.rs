// File: crates/ticker-core/src/chart.rs
// Summary: Paints the render window of a sanitized series as trend-colored segments.
// Notes:
// - Samples are spaced by index, not by elapsed time. Gaps in trading (nights,
//   weekends, dropped samples) collapse to a single column step.

use skia_safe as skia;

use crate::canvas::Canvas;
use crate::geometry::{clamp, PointI32};
use crate::scale::ScaleContext;
use crate::series::{RenderWindow, SanitizedSeries};
use crate::theme::Theme;
use crate::types::SurfaceSize;

/// One drawn step between consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: PointI32,
    pub to: PointI32,
    pub color: skia::Color,
}

/// What a render pass put on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    /// Final close of the window.
    pub last_value: f64,
    pub segments: Vec<Segment>,
}

pub struct ChartRenderer {
    increase: skia::Color,
    decrease: skia::Color,
    header_offset: u32,
}

impl ChartRenderer {
    pub fn new(theme: &Theme, size: SurfaceSize) -> Self {
        Self { increase: theme.increase, decrease: theme.decrease, header_offset: size.header_offset() }
    }

    /// Draw `window.count() - 1` segments for the trailing samples of `series`.
    ///
    /// Panics if the series is empty or shorter than the window; callers must
    /// reject empty series before rendering.
    pub fn render(
        &self,
        series: &SanitizedSeries,
        window: RenderWindow,
        scale: &ScaleContext,
        canvas: &mut Canvas,
    ) -> Rendered {
        assert!(!series.is_empty(), "cannot render an empty series");
        assert!(
            window.count() <= series.len(),
            "render window of {} exceeds series of {}",
            window.count(),
            series.len()
        );

        let values = series.tail(window.count());
        let bottom = canvas.height() as i32 - 1;
        let row = |v: f64| clamp(scale.row(v, self.header_offset), 0, bottom);

        let mut segments = Vec::with_capacity(values.len().saturating_sub(1));
        for (i, pair) in values.windows(2).enumerate() {
            let x = scale.column(i + 1);
            let from = PointI32::new(x, row(pair[0]));
            let to = PointI32::new(x, row(pair[1]));
            // row 0 is the top, so a smaller row means a higher price
            let color = if from.y > to.y { self.increase } else { self.decrease };
            canvas.draw_line(from, to, color);
            segments.push(Segment { from, to, color });
        }

        let last_value = values[values.len() - 1];
        tracing::trace!(segments = segments.len(), last_value, "chart rendered");
        Rendered { last_value, segments }
    }
}
