// File: crates/ticker-core/tests/scale.rs
// Purpose: Lookback min/max, scale factors and the flat-range guard.

use ticker_core::scale::lookback_len;
use ticker_core::{RenderWindow, SanitizedSeries, ScaleContext, Series, SurfaceSize};

fn clean(values: &[f64]) -> SanitizedSeries {
    let ts = (0..values.len() as i64).collect();
    Series::try_new(values.iter().copied().map(Some).collect(), ts).unwrap().sanitize()
}

#[test]
fn lookback_is_one_and_a_half_windows_rounded_up() {
    assert_eq!(lookback_len(1), 2);
    assert_eq!(lookback_len(2), 3);
    assert_eq!(lookback_len(3), 5);
    assert_eq!(lookback_len(4), 6);
}

#[test]
fn range_covers_only_the_lookback() {
    let series = clean(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    let size = SurfaceSize::new(64, 8, 4);
    let window = RenderWindow::fit(4, series.len(), size.width).unwrap();
    let s = ScaleContext::compute(&series, window, size);
    assert_eq!(s.min_price, 5.0);
    assert_eq!(s.max_price, 10.0);
    assert_eq!(s.x_scale, 16.0);
    // (rows - 1) * v_res / span
    assert!((s.y_scale - 28.0 / 5.0).abs() < 1e-12);
}

#[test]
fn short_series_scans_from_start() {
    let series = clean(&[50.0, 40.0, 45.0]);
    let size = SurfaceSize::new(32, 4, 2);
    let window = RenderWindow::fit(3, series.len(), size.width).unwrap();
    let s = ScaleContext::compute(&series, window, size);
    assert_eq!((s.min_price, s.max_price), (40.0, 50.0));
    assert!(s.y_scale > 0.0);
}

#[test]
fn flat_series_gets_zero_y_scale() {
    let series = clean(&[12.5, 12.5, 12.5, 12.5]);
    let size = SurfaceSize::default();
    let window = RenderWindow::fit(4, series.len(), size.width).unwrap();
    let s = ScaleContext::compute(&series, window, size);
    assert_eq!(s.y_scale, 0.0);
    assert!(s.y_scale.is_finite());
    assert_eq!(s.row(12.5, 4), 4);
}

#[test]
fn columns_stay_inside_width() {
    let series = clean(&(0..100).map(|v| v as f64).collect::<Vec<_>>());
    let size = SurfaceSize::new(37, 6, 4);
    let window = RenderWindow::fit(usize::MAX, series.len(), size.width).unwrap();
    let s = ScaleContext::compute(&series, window, size);
    for i in 0..window.count() {
        let x = s.column(i);
        assert!(x >= 0 && x < size.width as i32, "column {x} for step {i}");
    }
}

#[test]
fn higher_prices_map_to_smaller_rows() {
    let series = clean(&[10.0, 20.0]);
    let size = SurfaceSize::new(16, 5, 4);
    let window = RenderWindow::fit(2, series.len(), size.width).unwrap();
    let s = ScaleContext::compute(&series, window, size);
    assert_eq!(s.row(20.0, size.header_offset()), 4);
    assert_eq!(s.row(10.0, size.header_offset()), 4 + 16);
    assert!(s.row(15.0, 4) < s.row(12.0, 4));
}
