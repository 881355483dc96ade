// File: crates/ticker-core/src/config.rs
// Summary: Immutable run configuration, loaded once from JSON and passed by reference.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::theme::{self, Theme};
use crate::types::{SurfaceSize, ROWS, V_RES, WIDTH};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub symbol: String,
    /// Sampling interval label shown in the header, e.g. `5m`.
    pub interval: String,
    /// Requested history range, forwarded to the data source.
    pub range: String,
    pub region: String,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
    /// Points to draw; defaults to the surface width.
    pub window: Option<usize>,
    pub surface: SurfaceConfig,
    pub poll: PollConfig,
    pub source: SourceConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "AAPL".to_string(),
            interval: "5m".to_string(),
            range: "1d".to_string(),
            region: "US".to_string(),
            theme: "dark".to_string(),
            window: None,
            surface: SurfaceConfig::default(),
            poll: PollConfig::default(),
            source: SourceConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    pub width: u32,
    pub rows: u32,
    pub v_res: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { width: WIDTH, rows: ROWS, v_res: V_RES }
    }
}

/// Bounds of the randomized pause between passes, seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PollConfig {
    pub min_secs: u64,
    pub max_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { min_secs: 20, max_secs: 60 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Typed snapshots written by an external fetcher, `<dir>/<SYMBOL>.json`.
    Json { dir: PathBuf },
    /// Replay of a `timestamp,close` CSV file.
    Csv { path: PathBuf, currency: String },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Json { dir: PathBuf::from("quotes") }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayConfig {
    /// ANSI half-block rendering on stdout.
    #[default]
    Terminal,
    /// PNG written to `path` on every commit, each chart pixel `pixel_size` wide.
    Png { path: PathBuf, pixel_size: u32 },
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), symbol = %config.symbol, "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Config("symbol must not be empty".into()));
        }
        let s = &self.surface;
        if s.width == 0 || s.v_res == 0 {
            return Err(Error::Config(format!("surface {}x{} with v_res {} has no pixels", s.width, s.rows, s.v_res)));
        }
        if s.rows < 2 {
            return Err(Error::Config("surface needs a header row and at least one plot row".into()));
        }
        if self.window == Some(0) {
            return Err(Error::Config("window must be at least 1".into()));
        }
        if self.poll.min_secs > self.poll.max_secs {
            return Err(Error::Config(format!(
                "poll range {}..{} is inverted",
                self.poll.min_secs, self.poll.max_secs
            )));
        }
        if let DisplayConfig::Png { pixel_size: 0, .. } = self.display {
            return Err(Error::Config("png pixel_size must be at least 1".into()));
        }
        Ok(())
    }

    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.surface.width, self.surface.rows, self.surface.v_res)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    /// Requested render window, falling back to one point per pixel column.
    pub fn window_request(&self, width: u32) -> usize {
        self.window.unwrap_or(width as usize)
    }
}
