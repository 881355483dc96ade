// File: crates/ticker-core/src/pipeline.rs
// Summary: One render pass: sanitize, window, scale, rasterize, summarize.

use crate::canvas::Canvas;
use crate::chart::{ChartRenderer, Rendered};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::market::{Clock, MarketStatusEvaluator};
use crate::provider::{Quote, QuoteRequest};
use crate::scale::ScaleContext;
use crate::series::RenderWindow;
use crate::summary::{Summary, SummaryFormatter, SummaryInput};
use crate::theme::Theme;
use crate::types::SurfaceSize;

/// Output of a pass, handed to a display for presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub canvas: Canvas,
    pub summary: Summary,
    pub rendered: Rendered,
}

/// Runs render passes against a fixed config and theme.
pub struct RenderPass<'a, C> {
    config: &'a Config,
    theme: Theme,
    status: MarketStatusEvaluator<C>,
}

impl<'a, C: Clock> RenderPass<'a, C> {
    pub fn new(config: &'a Config, clock: C) -> Self {
        Self { config, theme: config.theme(), status: MarketStatusEvaluator::new(clock) }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn request(&self) -> QuoteRequest {
        QuoteRequest {
            symbol: self.config.symbol.clone(),
            region: self.config.region.clone(),
            interval: self.config.interval.clone(),
            range: self.config.range.clone(),
        }
    }

    /// Render `quote` onto a fresh canvas sized for `size`.
    /// A series with no usable closes aborts the pass with [`Error::MissingData`].
    pub fn run(&self, quote: &Quote, size: SurfaceSize) -> Result<Frame> {
        let sanitized = quote.series.sanitize();
        let dropped = quote.series.len() - sanitized.len();
        if dropped > 0 {
            tracing::debug!(symbol = %quote.symbol, dropped, "skipped missing samples");
        }
        let (Some((_, last_timestamp)), Some(window)) = (
            sanitized.last(),
            RenderWindow::fit(self.config.window_request(size.width), sanitized.len(), size.width),
        ) else {
            return Err(Error::MissingData { symbol: quote.symbol.clone() });
        };

        let scale = ScaleContext::compute(&sanitized, window, size);
        let mut canvas = Canvas::for_surface(size, self.theme.background);
        let rendered = ChartRenderer::new(&self.theme, size).render(&sanitized, window, &scale, &mut canvas);

        let market_open = quote.session.is_some_and(|s| self.status.is_open(&s));
        let previous_close = quote.previous_close.or_else(|| sanitized.second_to_last());
        let summary = SummaryFormatter::new(&self.theme).format(&SummaryInput {
            symbol: &quote.symbol,
            interval: &self.config.interval,
            currency: &quote.currency,
            market_open,
            last_price: rendered.last_value,
            last_timestamp,
            gmt_offset: quote.gmt_offset(),
            previous_close,
        });

        tracing::info!(
            symbol = %quote.symbol,
            points = window.count(),
            last = rendered.last_value,
            pct = ?summary.pct_change,
            market_open,
            "render pass complete"
        );
        Ok(Frame { canvas, summary, rendered })
    }
}
