//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for pixel buffer output (8-bit RGB, no alpha).
pub struct PngEncoder;

impl PngEncoder {
    /// Write a pixel buffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(buf: &PixelBuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::encode(buf, BufWriter::new(file))?;
        log::debug!("wrote {}x{} PNG to {}", buf.width(), buf.height(), path.display());
        Ok(())
    }

    /// Encode a pixel buffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(buf: &PixelBuffer) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        Self::encode(buf, &mut bytes)?;
        Ok(bytes)
    }

    fn encode<W: Write>(buf: &PixelBuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, buf.width(), buf.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(buf.pixels())?;
        writer.finish()?;

        Ok(())
    }
}
