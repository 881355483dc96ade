// File: crates/ticker-core/benches/render_bench.rs
// Summary: Render-pass throughput for long, gappy series on typical surface sizes.

use ticker_core::{Config, FixedClock, Quote, RenderPass, Series, SurfaceSize};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_quote(n: usize) -> Quote {
    let mut values = Vec::with_capacity(n);
    let mut timestamps = Vec::with_capacity(n);
    for i in 0..n {
        let y = (i as f64 * 0.01).sin() * 10.0 + 100.0;
        values.push(if i % 11 == 0 { None } else { Some(y) });
        timestamps.push(1_700_000_000 + i as i64 * 60);
    }
    Quote {
        symbol: "BENCH".into(),
        currency: "USD".into(),
        previous_close: Some(100.0),
        session: None,
        series: Series::try_new(values, timestamps).expect("equal lengths"),
    }
}

fn bench_render(c: &mut Criterion) {
    let config = Config::default();
    let pass = RenderPass::new(&config, FixedClock::new(1_700_000_000));
    let mut group = c.benchmark_group("render_pass");
    for &(n, width) in &[(390usize, 64u32), (10_000, 64), (10_000, 320)] {
        let quote = build_quote(n);
        let size = SurfaceSize::new(width, 8, 4);
        group.bench_function(format!("n{n}_w{width}"), |b| {
            b.iter(|| black_box(pass.run(&quote, size).expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
