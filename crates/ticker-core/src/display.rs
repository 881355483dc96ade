// File: crates/ticker-core/src/display.rs
// Summary: Display surface abstraction the render pass presents frames on.

use anyhow::Result;
use skia_safe as skia;

use crate::pipeline::Frame;
use crate::types::SurfaceSize;

/// A fixed-size output surface. Implementations own presentation only;
/// frames arrive fully rasterized.
pub trait Display {
    /// Pixel width, text rows and fine vertical resolution of the surface.
    fn size(&self) -> SurfaceSize;
    /// Background and text colors used for text and unlit pixels.
    fn set_colors(&mut self, background: skia::Color, text: skia::Color);
    /// Present a frame.
    fn commit(&mut self, frame: &Frame) -> Result<()>;
}
