// File: crates/ticker-core/tests/png.rs
// Purpose: PNG display output: dimensions, pixel colors, file commits and a golden snapshot.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns without failing.

use ticker_core::{Config, Display, FixedClock, Frame, PngDisplay, PngOptions, Quote, RenderPass, Series, SurfaceSize};

const PX: u32 = 4;

fn frame(size: SurfaceSize) -> Frame {
    let cfg = Config { window: Some(5), ..Config::default() };
    let quote = Quote {
        symbol: "AAPL".into(),
        currency: "USD".into(),
        previous_close: Some(100.0),
        session: None,
        series: Series::try_new(
            vec![Some(100.0), Some(101.5), None, Some(99.0), Some(102.0), Some(104.0)],
            vec![0, 300, 600, 900, 1200, 1500],
        )
        .unwrap(),
    };
    RenderPass::new(&cfg, FixedClock::new(0)).run(&quote, size).expect("render pass")
}

fn display(size: SurfaceSize, name: &str) -> PngDisplay {
    let path = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    PngDisplay::new(path, size, PngOptions { pixel_size: PX, draw_text: false })
}

#[test]
fn png_has_canvas_plus_footer_band() {
    let size = SurfaceSize::new(20, 5, 4);
    let frame = frame(size);
    let bytes = display(size, "dims.png").render_png_bytes(&frame).expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.width(), 20 * PX);
    assert_eq!(img.height(), (5 * 4 + 4) * PX);
}

#[test]
fn lit_pixels_keep_their_color() {
    let size = SurfaceSize::new(20, 5, 4);
    let frame = frame(size);
    let mut out = display(size, "colors.png");
    let theme = ticker_core::Theme::dark();
    out.set_colors(theme.background, theme.text);
    let img = image::load_from_memory(&out.render_png_bytes(&frame).unwrap()).unwrap().to_rgba8();

    let (p, color) = frame.canvas.lit().next().expect("something was drawn");
    let got = img.get_pixel(p.x as u32 * PX + PX / 2, p.y as u32 * PX + PX / 2);
    assert_eq!(got.0, [color.r(), color.g(), color.b(), 255]);

    let corner = img.get_pixel(0, 0);
    assert_eq!(corner.0, [theme.background.r(), theme.background.g(), theme.background.b(), 255]);
}

#[test]
fn commit_writes_the_file() {
    let size = SurfaceSize::new(16, 4, 4);
    let mut out = display(size, "nested/commit.png");
    out.commit(&frame(size)).expect("commit");
    let meta = std::fs::metadata(out.path()).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn golden_frame() {
    let size = SurfaceSize::new(24, 4, 4);
    let bytes = display(size, "golden.png").render_png_bytes(&frame(size)).unwrap();
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/frame.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(snap_path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
