// File: crates/ticker/src/csv_source.rs
// Summary: Data source replaying a `timestamp,close` CSV file on every poll.

use std::path::{Path, PathBuf};

use ticker_core::error::Result;
use ticker_core::{DataSource, Quote, QuoteRequest, Series};

pub struct CsvSource {
    path: PathBuf,
    currency: String,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, currency: impl Into<String>) -> Self {
        Self { path: path.into(), currency: currency.into() }
    }
}

impl DataSource for CsvSource {
    fn fetch(&mut self, request: &QuoteRequest) -> Result<Quote> {
        let (values, timestamps) = load_close_csv(&self.path)?;
        tracing::debug!(path = %self.path.display(), rows = values.len(), "csv replayed");
        Ok(Quote {
            symbol: request.symbol.clone(),
            currency: self.currency.clone(),
            previous_close: None,
            session: None,
            series: Series::try_new(values, timestamps)?,
        })
    }
}

/// Read closes and epoch-second timestamps. Blank or unparsable closes
/// become missing samples; rows without a timestamp are skipped.
fn load_close_csv(path: &Path) -> Result<(Vec<Option<f64>>, Vec<i64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["timestamp", "time", "date", "open_time"]).unwrap_or(0);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]).unwrap_or(1);

    let mut values = Vec::new();
    let mut timestamps = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        let Some(t) = rec.get(i_time).and_then(parse_epoch_secs) else {
            continue;
        };
        let close = rec.get(i_close).and_then(|s| s.trim().parse::<f64>().ok());
        values.push(close);
        timestamps.push(t);
    }
    Ok((values, timestamps))
}

fn parse_epoch_secs(s: &str) -> Option<i64> {
    let n = s.trim().parse::<i64>().ok()?;
    // epoch ms -> sec
    if n > 10_i64.pow(12) { Some(n / 1000) } else { Some(n) }
}

fn csv_err(e: csv::Error) -> ticker_core::Error {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => ticker_core::Error::Io(io),
        other => ticker_core::Error::Source(format!("csv: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_closes_with_gaps() {
        let path = std::env::temp_dir().join(format!("ticker_csv_{}.csv", std::process::id()));
        std::fs::write(&path, "timestamp,close\n1700000000,10.5\n1700000300,\n1700000600000,11.25\n,12\n").unwrap();

        let request = QuoteRequest { symbol: "ABC".into(), region: "US".into(), interval: "5m".into(), range: "1d".into() };
        let quote = CsvSource::new(&path, "USD").fetch(&request).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(quote.symbol, "ABC");
        assert_eq!(quote.series.values(), &[Some(10.5), None, Some(11.25)]);
        assert_eq!(quote.series.timestamps(), &[1700000000, 1700000300, 1700000600]);
    }
}
