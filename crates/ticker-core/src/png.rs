// File: crates/ticker-core/src/png.rs
// Summary: Headless display that blits frames onto a Skia CPU raster surface and writes PNGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::display::Display;
use crate::pipeline::Frame;
use crate::text::TextShaper;
use crate::types::SurfaceSize;

pub struct PngOptions {
    /// Output edge length of one canvas pixel.
    pub pixel_size: u32,
    /// Text is skipped when false; keeps snapshot output font independent.
    pub draw_text: bool,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self { pixel_size: 8, draw_text: true }
    }
}

pub struct PngDisplay {
    path: PathBuf,
    size: SurfaceSize,
    opts: PngOptions,
    background: skia::Color,
    text: skia::Color,
    shaper: TextShaper,
}

impl PngDisplay {
    pub fn new(path: impl Into<PathBuf>, size: SurfaceSize, opts: PngOptions) -> Self {
        Self {
            path: path.into(),
            size,
            opts,
            background: skia::Color::BLACK,
            text: skia::Color::WHITE,
            shaper: TextShaper::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output image dimensions: the canvas plus a footer band one text row tall.
    pub fn image_size(&self) -> (i32, i32) {
        let px = self.opts.pixel_size as i32;
        let w = self.size.width as i32 * px;
        let h = (self.size.fine_height() + self.size.v_res) as i32 * px;
        (w, h)
    }

    /// Encode a frame to PNG bytes.
    pub fn render_png_bytes(&self, frame: &Frame) -> Result<Vec<u8>> {
        let (w, h) = self.image_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.background);

        let px = self.opts.pixel_size as f32;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Fill);
        for (p, color) in frame.canvas.lit() {
            paint.set_color(color);
            let x = p.x as f32 * px;
            let y = p.y as f32 * px;
            canvas.draw_rect(skia::Rect::from_xywh(x, y, px, px), &paint);
        }

        if self.opts.draw_text {
            self.draw_text(canvas, frame);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw_text(&self, canvas: &skia::Canvas, frame: &Frame) {
        let px = self.opts.pixel_size as f32;
        let band = self.size.v_res as f32 * px;
        let font_size = band * 0.8;
        let margin = px;
        let summary = &frame.summary;

        self.shaper.draw(canvas, &summary.header, margin, 0.0, font_size, self.text);

        let footer_top = self.size.fine_height() as f32 * px;
        self.shaper.draw(canvas, &summary.price_field, margin, footer_top, font_size, self.text);
        if let Some(change) = &summary.change_field {
            let width = self.shaper.measure_width(change, font_size);
            let x = (self.size.width as f32 * px - margin - width).max(margin);
            let color = summary.change_color.unwrap_or(self.text);
            self.shaper.draw(canvas, change, x, footer_top, font_size, color);
        }
    }
}

impl Display for PngDisplay {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_colors(&mut self, background: skia::Color, text: skia::Color) {
        self.background = background;
        self.text = text;
    }

    fn commit(&mut self, frame: &Frame) -> Result<()> {
        let bytes = self.render_png_bytes(frame)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, bytes)
            .with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "frame written");
        Ok(())
    }
}
