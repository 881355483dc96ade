// File: crates/ticker-core/src/terminal.rs
// Summary: Terminal display using ANSI truecolor upper-half blocks (two fine rows per cell).

use std::io::Write;

use anyhow::Result;
use skia_safe as skia;

use crate::display::Display;
use crate::pipeline::Frame;
use crate::types::SurfaceSize;

/// Fine rows per terminal cell.
pub const TERMINAL_V_RES: u32 = 2;

const HALF_BLOCK: char = '▀';
const RESET: &str = "\x1b[0m";
const HOME_AND_CLEAR: &str = "\x1b[H\x1b[2J";

pub struct TerminalDisplay<W: Write> {
    out: W,
    size: SurfaceSize,
    background: skia::Color,
    text: skia::Color,
    clear_screen: bool,
}

impl<W: Write> TerminalDisplay<W> {
    /// `width` columns by `rows` text rows; the first row carries the header.
    pub fn new(out: W, width: u32, rows: u32) -> Self {
        Self {
            out,
            size: SurfaceSize::new(width, rows, TERMINAL_V_RES),
            background: skia::Color::BLACK,
            text: skia::Color::WHITE,
            clear_screen: true,
        }
    }

    /// Keep earlier output instead of redrawing in place.
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn fg(c: skia::Color) -> String {
    format!("\x1b[38;2;{};{};{}m", c.r(), c.g(), c.b())
}

fn bg(c: skia::Color) -> String {
    format!("\x1b[48;2;{};{};{}m", c.r(), c.g(), c.b())
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_colors(&mut self, background: skia::Color, text: skia::Color) {
        self.background = background;
        self.text = text;
    }

    fn commit(&mut self, frame: &Frame) -> Result<()> {
        let canvas = &frame.canvas;
        let summary = &frame.summary;
        let mut buf = String::new();
        if self.clear_screen {
            buf.push_str(HOME_AND_CLEAR);
        }

        // header occupies the reserved top cell row
        let header_cells = (canvas.height() / TERMINAL_V_RES).min(1);
        if header_cells == 1 {
            buf.push_str(&bg(self.background));
            buf.push_str(&fg(self.text));
            buf.push_str(&summary.header);
            buf.push_str(RESET);
            buf.push('\n');
        }

        let mut y = header_cells * TERMINAL_V_RES;
        while y < canvas.height() {
            let top = canvas.row(y);
            let bottom = (y + 1 < canvas.height()).then(|| canvas.row(y + 1));
            for (x, &upper) in top.iter().enumerate() {
                let lower = bottom.map_or(self.background, |row| row[x]);
                buf.push_str(&fg(upper));
                buf.push_str(&bg(lower));
                buf.push(HALF_BLOCK);
            }
            buf.push_str(RESET);
            buf.push('\n');
            y += TERMINAL_V_RES;
        }

        buf.push_str(&bg(self.background));
        buf.push_str(&fg(self.text));
        buf.push_str(&summary.price_field);
        if let Some(change) = &summary.change_field {
            buf.push(' ');
            buf.push_str(&fg(summary.change_color.unwrap_or(self.text)));
            buf.push_str(change);
        }
        buf.push_str(RESET);
        buf.push('\n');

        self.out.write_all(buf.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
