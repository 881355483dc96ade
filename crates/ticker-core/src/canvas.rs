// File: crates/ticker-core/src/canvas.rs
// Summary: Pixel-addressed color buffer the chart is rasterized into.

use skia_safe as skia;

use crate::geometry::{line_points, PointI32};
use crate::types::SurfaceSize;

/// Row-major grid of colors, `width` columns by `height` fine rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: skia::Color,
    pixels: Vec<skia::Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: skia::Color) -> Self {
        Self { width, height, background, pixels: vec![background; (width * height) as usize] }
    }

    /// Canvas covering a whole surface in fine vertical units.
    pub fn for_surface(size: SurfaceSize, background: skia::Color) -> Self {
        Self::new(size.width, size.fine_height(), background)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn background(&self) -> skia::Color { self.background }

    pub fn contains(&self, p: PointI32) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Assign one pixel. Panics when `p` lies outside the canvas.
    pub fn put(&mut self, p: PointI32, color: skia::Color) {
        assert!(self.contains(p), "pixel {p:?} outside {}x{} canvas", self.width, self.height);
        let idx = p.y as usize * self.width as usize + p.x as usize;
        self.pixels[idx] = color;
    }

    pub fn get(&self, p: PointI32) -> Option<skia::Color> {
        self.contains(p).then(|| self.pixels[p.y as usize * self.width as usize + p.x as usize])
    }

    /// Rasterize a straight segment in a single color. Both endpoints must be on-canvas.
    pub fn draw_line(&mut self, from: PointI32, to: PointI32, color: skia::Color) {
        for p in line_points(from, to) {
            self.put(p, color);
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Pixels differing from the background, in row-major order.
    pub fn lit(&self) -> impl Iterator<Item = (PointI32, skia::Color)> + '_ {
        let w = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c != self.background)
            .map(move |(i, &c)| (PointI32::new((i % w) as i32, (i / w) as i32), c))
    }

    /// Color of every pixel in one row.
    pub fn row(&self, y: u32) -> &[skia::Color] {
        let w = self.width as usize;
        &self.pixels[y as usize * w..(y as usize + 1) * w]
    }

    /// Tightly packed RGBA8 copy of the buffer.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for c in &self.pixels {
            out.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
        }
        out
    }
}
