//! Terminal preview of a pixel buffer.
//!
//! Downsamples the buffer by nearest-neighbour lookup and prints either an
//! ASCII luminance ramp or ANSI 24-bit colored cells.

use crate::color::Rgb;
use crate::framebuffer::PixelBuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII luminance characters (widest compatibility)
    #[default]
    Ascii,
    /// Space characters on an ANSI 24-bit background color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    columns: Option<u32>,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Luminance ramp from dark to light.
    const ASCII_RAMP: &'static [u8] = b" .:-=+*#%@";

    /// Monospace cells are roughly twice as tall as they are wide.
    const CELL_ASPECT: u32 = 2;

    /// Default output width in characters.
    const DEFAULT_COLUMNS: u32 = 80;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), columns: None, invert: false }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output width in characters. Rows follow from the aspect ratio.
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns.max(1));
        self
    }

    /// Invert luminance (for light-on-dark terminals in ASCII mode).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Output size in (columns, rows).
    #[must_use]
    pub fn dimensions(&self, buf: &PixelBuffer) -> (u32, u32) {
        let cols = self.columns.unwrap_or(Self::DEFAULT_COLUMNS.min(buf.width()));
        let rows = (u64::from(cols) * u64::from(buf.height())
            / (u64::from(buf.width()) * u64::from(Self::CELL_ASPECT)))
        .max(1);
        (cols, rows as u32)
    }

    /// Render a pixel buffer to a string, one line per row.
    #[must_use]
    pub fn render(&self, buf: &PixelBuffer) -> String {
        let (cols, rows) = self.dimensions(buf);
        let mut out = String::with_capacity((cols as usize + 8) * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let color = Self::sample(buf, col, row, cols, rows);
                match self.mode {
                    TerminalMode::Ascii => out.push(self.ramp_char(color)),
                    TerminalMode::AnsiTrueColor => {
                        let _ = write!(out, "\x1b[48;2;{};{};{}m ", color.r, color.g, color.b);
                    }
                }
            }
            if self.mode == TerminalMode::AnsiTrueColor {
                out.push_str("\x1b[0m");
            }
            out.push('\n');
        }

        out
    }

    /// Write output directly to stdout.
    pub fn print(&self, buf: &PixelBuffer) {
        print!("{}", self.render(buf));
    }

    /// Nearest source pixel for output cell `(col, row)`.
    fn sample(buf: &PixelBuffer, col: u32, row: u32, cols: u32, rows: u32) -> Rgb {
        let x = (u64::from(col) * u64::from(buf.width()) / u64::from(cols)) as u32;
        let y = (u64::from(row) * u64::from(buf.height()) / u64::from(rows)) as u32;
        buf.get_pixel(x.min(buf.width() - 1), y.min(buf.height() - 1)).unwrap_or_default()
    }

    fn ramp_char(&self, color: Rgb) -> char {
        let luma = if self.invert { 1.0 - color.luma() } else { color.luma() };
        let last = Self::ASCII_RAMP.len() - 1;
        let idx = ((luma * last as f32).round() as usize).min(last);
        char::from(Self::ASCII_RAMP[idx])
    }
}
