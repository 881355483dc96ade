// File: crates/ticker-core/src/provider.rs
// Summary: Data-source boundary: typed snapshot schema, validated quotes, file-backed source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::market::SessionBounds;
use crate::series::Series;

/// What to fetch for one poll cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRequest {
    pub symbol: String,
    pub region: String,
    pub interval: String,
    pub range: String,
}

/// Provider output as it arrives at the boundary. Every field the provider
/// may leave out is optional here; [`Quote::try_from`] decides what is fatal.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Snapshot {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub previous_close: Option<f64>,
    pub session: Option<SessionBounds>,
    #[serde(default)]
    pub timestamps: Vec<i64>,
    /// Close prices paired with `timestamps`; `null` entries are missing samples.
    pub close: Option<Vec<Option<f64>>>,
}

/// A validated fetch result, ready for the render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub currency: String,
    pub previous_close: Option<f64>,
    pub session: Option<SessionBounds>,
    pub series: Series,
}

impl Quote {
    /// Validate a snapshot fetched for `requested`.
    pub fn from_snapshot(snapshot: Snapshot, requested: &str) -> Result<Self> {
        let symbol = snapshot.symbol.unwrap_or_else(|| requested.to_string());
        let Some(close) = snapshot.close else {
            return Err(Error::MissingData { symbol });
        };
        let series = Series::try_new(close, snapshot.timestamps)?;
        Ok(Self {
            symbol,
            currency: snapshot.currency.unwrap_or_default(),
            previous_close: snapshot.previous_close.filter(|p| p.is_finite()),
            session: snapshot.session,
            series,
        })
    }

    /// Offset used to localize timestamps; zero without session info.
    pub fn gmt_offset(&self) -> i64 {
        self.session.map(|s| s.gmt_offset).unwrap_or(0)
    }
}

/// Supplies one quote per poll cycle.
pub trait DataSource {
    fn fetch(&mut self, request: &QuoteRequest) -> Result<Quote>;
}

/// Reads `<dir>/<SYMBOL>.json` snapshots kept fresh by an external fetcher.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{symbol}.json"))
    }
}

impl DataSource for JsonFileSource {
    fn fetch(&mut self, request: &QuoteRequest) -> Result<Quote> {
        let path = self.path_for(&request.symbol);
        tracing::debug!(
            path = %path.display(),
            region = %request.region,
            interval = %request.interval,
            range = %request.range,
            "reading snapshot"
        );
        let raw = std::fs::read_to_string(&path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Quote::from_snapshot(snapshot, &request.symbol)
    }
}
