// File: crates/ticker-core/tests/terminal.rs
// Purpose: ANSI half-block output of the terminal display.

use ticker_core::terminal::TERMINAL_V_RES;
use ticker_core::{Config, Display, FixedClock, Quote, RenderPass, Series, TerminalDisplay, Theme};

fn quote() -> Quote {
    Quote {
        symbol: "SAP".into(),
        currency: "EUR".into(),
        previous_close: None,
        session: None,
        series: Series::try_new(vec![Some(10.0), Some(12.0), None, Some(11.0)], vec![0, 60, 120, 180]).unwrap(),
    }
}

#[test]
fn draws_header_plot_rows_and_footer() {
    let cfg = Config::default();
    let mut display = TerminalDisplay::new(Vec::new(), 8, 4).without_clear();
    assert_eq!(display.size().v_res, TERMINAL_V_RES);
    let theme = Theme::dark();
    display.set_colors(theme.background, theme.text);

    let frame = RenderPass::new(&cfg, FixedClock::new(0)).run(&quote(), display.size()).unwrap();
    display.commit(&frame).unwrap();
    let out = String::from_utf8(display.into_inner()).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    // header + 3 plot rows + footer
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("○SAP 5m 00:03"));
    for row in &lines[1..4] {
        assert_eq!(row.matches('▀').count(), 8);
    }
    // 11 vs 12 fallback previous close
    assert!(lines[4].contains("11.00€"));
    assert!(lines[4].contains("-8.33%"));
    let d = theme.decrease;
    assert!(lines[4].contains(&format!("\x1b[38;2;{};{};{}m-8.33%", d.r(), d.g(), d.b())));
}

#[test]
fn clears_screen_by_default() {
    let cfg = Config::default();
    let mut display = TerminalDisplay::new(Vec::new(), 4, 2);
    let frame = RenderPass::new(&cfg, FixedClock::new(0)).run(&quote(), display.size()).unwrap();
    display.commit(&frame).unwrap();
    let out = String::from_utf8(display.into_inner()).unwrap();
    assert!(out.starts_with("\x1b[H\x1b[2J"));
}
