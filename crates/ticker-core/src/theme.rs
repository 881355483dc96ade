// File: crates/ticker-core/src/theme.rs
// Summary: Color presets for the chart and its text.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub text: skia::Color,
    /// Segments that move up and non-negative percent changes.
    pub increase: skia::Color,
    /// Segments that move down or sideways, and negative percent changes.
    pub decrease: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 235, 235, 245),
            increase: skia::Color::from_argb(255, 40, 200, 120),
            decrease: skia::Color::from_argb(255, 220, 80, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            text: skia::Color::from_argb(255, 20, 20, 30),
            increase: skia::Color::from_argb(255, 20, 160, 90),
            decrease: skia::Color::from_argb(255, 200, 60, 60),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            text: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            increase: skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),   // cyan/green
            decrease: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),   // red
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            increase: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            decrease: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
        }
    }

    pub fn trend(&self, rising: bool) -> skia::Color {
        if rising { self.increase } else { self.decrease }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::warn!(theme = name, "unknown theme, using dark");
    Theme::dark()
}
