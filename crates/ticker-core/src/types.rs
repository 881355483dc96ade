// File: crates/ticker-core/src/types.rs
// Summary: Shared types and constants (surface sizes, lookback factor).

/// Default surface width in pixels.
pub const WIDTH: u32 = 64;
/// Default surface height in text rows.
pub const ROWS: u32 = 8;
/// Default fine vertical units per text row (braille cell height).
pub const V_RES: u32 = 4;

/// Min/max are taken over this many times the render window for headroom.
pub const LOOKBACK_FACTOR: f64 = 1.5;

/// Dimensions of a display surface.
/// Contract: all fields are positive; `rows` includes the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Pixel columns.
    pub width: u32,
    /// Text rows.
    pub rows: u32,
    /// Fine vertical pixels per text row.
    pub v_res: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, rows: u32, v_res: u32) -> Self {
        Self { width, rows, v_res }
    }
    /// Height in fine vertical units.
    pub const fn fine_height(&self) -> u32 { self.rows * self.v_res }
    /// Fine rows available to the plot once the header row is reserved.
    pub const fn plot_height(&self) -> u32 { self.rows.saturating_sub(1) * self.v_res }
    /// Rows reserved at the top of the canvas for the header text.
    pub const fn header_offset(&self) -> u32 { self.v_res }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(WIDTH, ROWS, V_RES)
    }
}
