//! Binary portable pixmap (PPM, `P6`) encoder.

use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Maximum channel value written in the header.
const MAX_VALUE: u8 = 255;

/// PPM encoder for pixel buffer output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a pixel buffer to a `.ppm` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_file<P: AsRef<Path>>(buf: &PixelBuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write(buf, &mut writer)?;
        writer.flush()?;
        log::debug!("wrote {}x{} PPM to {}", buf.width(), buf.height(), path.display());
        Ok(())
    }

    /// Write a pixel buffer as PPM to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write<W: Write>(buf: &PixelBuffer, writer: &mut W) -> Result<()> {
        write!(writer, "P6\n{} {}\n{MAX_VALUE}\n", buf.width(), buf.height())?;
        writer.write_all(buf.pixels())?;
        Ok(())
    }

    /// Encode a pixel buffer to PPM bytes.
    #[must_use]
    pub fn to_bytes(buf: &PixelBuffer) -> Vec<u8> {
        let header = format!("P6\n{} {}\n{MAX_VALUE}\n", buf.width(), buf.height());
        let mut bytes = Vec::with_capacity(header.len() + buf.pixels().len());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(buf.pixels());
        bytes
    }
}
