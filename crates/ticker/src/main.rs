// File: crates/ticker/src/main.rs
// Summary: Poll loop: fetch a quote, run a render pass, present it, sleep a random interval.

mod csv_source;

use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ticker_core::config::{DisplayConfig, PollConfig, SourceConfig};
use ticker_core::terminal::TerminalDisplay;
use ticker_core::{Config, DataSource, Display, JsonFileSource, PngDisplay, PngOptions, RenderPass, SystemClock};

use crate::csv_source::CsvSource;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ticker=info,ticker_core=info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config_path = None;
    let mut once = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--once" => once = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match &config_path {
        Some(path) => Config::load(path).with_context(|| format!("failed to load config '{path}'"))?,
        None => {
            info!("no config given, using defaults");
            Config::default()
        }
    };

    let mut source = build_source(&config.source);
    let mut display = build_display(&config);
    let pass = RenderPass::new(&config, SystemClock);
    let theme = pass.theme();
    display.set_colors(theme.background, theme.text);
    info!(symbol = %config.symbol, theme = theme.name, "starting ticker");

    loop {
        if let Err(e) = run_cycle(&pass, source.as_mut(), display.as_mut()) {
            // a failed pass never ends the process; the next poll retries
            warn!("render pass aborted: {e:#}");
        }
        if once {
            return Ok(());
        }
        let pause = poll_pause(&config.poll);
        info!(secs = pause.as_secs(), "sleeping until next poll");
        std::thread::sleep(pause);
    }
}

fn run_cycle(pass: &RenderPass<'_, SystemClock>, source: &mut dyn DataSource, display: &mut dyn Display) -> Result<()> {
    let request = pass.request();
    let quote = source
        .fetch(&request)
        .with_context(|| format!("fetching {}", request.symbol))?;
    let frame = pass.run(&quote, display.size())?;
    display.commit(&frame).context("presenting frame")?;
    Ok(())
}

fn build_source(cfg: &SourceConfig) -> Box<dyn DataSource> {
    match cfg {
        SourceConfig::Json { dir } => Box::new(JsonFileSource::new(dir)),
        SourceConfig::Csv { path, currency } => Box::new(CsvSource::new(path, currency.as_str())),
    }
}

fn build_display(config: &Config) -> Box<dyn Display> {
    match &config.display {
        DisplayConfig::Terminal => {
            let s = config.surface_size();
            if s.v_res != ticker_core::terminal::TERMINAL_V_RES {
                warn!(v_res = s.v_res, "terminal output uses half blocks; ignoring configured v_res");
            }
            Box::new(TerminalDisplay::new(std::io::stdout(), s.width, s.rows))
        }
        DisplayConfig::Png { path, pixel_size } => {
            let opts = PngOptions { pixel_size: *pixel_size, ..PngOptions::default() };
            Box::new(PngDisplay::new(path, config.surface_size(), opts))
        }
    }
}

/// Uniformly random pause within the configured bounds, to spread load on the provider.
fn poll_pause(poll: &PollConfig) -> Duration {
    if poll.min_secs >= poll.max_secs {
        return Duration::from_secs(poll.min_secs);
    }
    let secs = rand::thread_rng().gen_range(poll.min_secs..=poll.max_secs);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_stays_within_bounds() {
        let poll = PollConfig { min_secs: 20, max_secs: 60 };
        for _ in 0..200 {
            let secs = poll_pause(&poll).as_secs();
            assert!((20..=60).contains(&secs), "pause {secs}s out of range");
        }
    }

    #[test]
    fn degenerate_range_uses_min() {
        let poll = PollConfig { min_secs: 5, max_secs: 5 };
        assert_eq!(poll_pause(&poll), Duration::from_secs(5));
    }
}
