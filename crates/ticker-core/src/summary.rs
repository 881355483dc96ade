// File: crates/ticker-core/src/summary.rs
// Summary: Header/footer text: status glyph, last update time, price, percent change.

use chrono::{DateTime, FixedOffset};
use skia_safe as skia;

use crate::theme::Theme;

/// Glyph shown before the symbol while the regular session is open.
pub const OPEN_GLYPH: &str = "●";
/// Glyph shown before the symbol outside the regular session.
pub const CLOSED_GLYPH: &str = "○";

const FMT_TIME: &str = "%H:%M";

/// Percent change from `previous` to `last`, rounded to two decimals.
/// `None` when `previous` is zero or either input is not finite.
pub fn pct_change(last: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 || !previous.is_finite() || !last.is_finite() {
        return None;
    }
    let pct = ((last / previous * 100.0 - 100.0) * 100.0).round() / 100.0;
    // -0.00 after rounding reads as no change
    Some(if pct == 0.0 { 0.0 } else { pct })
}

/// `+5.00` / `-5.00`; zero is shown with a plus sign.
pub fn format_pct(pct: f64) -> String {
    format!("{pct:+.2}")
}

/// Display glyph for an ISO currency code; unknown codes pass through.
pub fn currency_glyph(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        other => other,
    }
}

/// `HH:MM` of `timestamp` at the exchange's GMT offset.
pub fn format_time(timestamp: i64, gmt_offset: i64) -> Option<String> {
    let offset = FixedOffset::east_opt(i32::try_from(gmt_offset).ok()?)?;
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    Some(utc.with_timezone(&offset).format(FMT_TIME).to_string())
}

/// Everything the summary lines are built from.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryInput<'a> {
    pub symbol: &'a str,
    pub interval: &'a str,
    pub currency: &'a str,
    pub market_open: bool,
    pub last_price: f64,
    pub last_timestamp: i64,
    pub gmt_offset: i64,
    /// Explicit previous close, or the second-to-last sanitized close.
    pub previous_close: Option<f64>,
}

/// The two text lines of a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// `<status><symbol> <interval> <HH:MM>`
    pub header: String,
    /// `<price><currency>`
    pub price_field: String,
    /// `<±pct>%`; `None` when there is no usable previous close.
    pub change_field: Option<String>,
    pub pct_change: Option<f64>,
    /// Color of the percent field.
    pub change_color: Option<skia::Color>,
}

impl Summary {
    /// `<price><currency> <±pct>%`, percent omitted when undefined.
    pub fn footer(&self) -> String {
        match &self.change_field {
            Some(change) => format!("{} {change}", self.price_field),
            None => self.price_field.clone(),
        }
    }
}

pub struct SummaryFormatter<'t> {
    theme: &'t Theme,
}

impl<'t> SummaryFormatter<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    pub fn format(&self, input: &SummaryInput<'_>) -> Summary {
        let status = if input.market_open { OPEN_GLYPH } else { CLOSED_GLYPH };
        let time = format_time(input.last_timestamp, input.gmt_offset).unwrap_or_default();
        let header = format!("{status}{} {} {time}", input.symbol, input.interval);

        let pct = input.previous_close.and_then(|prev| pct_change(input.last_price, prev));
        if pct.is_none() {
            tracing::debug!(symbol = input.symbol, "no usable previous close, percent change suppressed");
        }
        let price_field = format!("{:.2}{}", input.last_price, currency_glyph(input.currency));
        let change_field = pct.map(|p| format!("{}%", format_pct(p)));
        let change_color = pct.map(|p| self.theme.trend(p >= 0.0));

        Summary { header, price_field, change_field, pct_change: pct, change_color }
    }
}
