// File: crates/ticker-core/src/lib.rs
// Summary: Core library entry point; price-series charting for small fixed-size displays.

pub mod canvas;
pub mod chart;
pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod market;
pub mod pipeline;
pub mod png;
pub mod provider;
pub mod scale;
pub mod series;
pub mod summary;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod types;

pub use canvas::Canvas;
pub use chart::{ChartRenderer, Rendered, Segment};
pub use config::Config;
pub use display::Display;
pub use error::{Error, Result};
pub use market::{Clock, FixedClock, MarketStatusEvaluator, SessionBounds, SystemClock};
pub use pipeline::{Frame, RenderPass};
pub use png::{PngDisplay, PngOptions};
pub use provider::{DataSource, JsonFileSource, Quote, QuoteRequest, Snapshot};
pub use scale::ScaleContext;
pub use series::{PricePoint, RenderWindow, SanitizedSeries, Series};
pub use summary::{Summary, SummaryFormatter};
pub use terminal::TerminalDisplay;
pub use theme::Theme;
pub use types::SurfaceSize;
