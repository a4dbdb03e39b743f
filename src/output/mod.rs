//! Output encoders (PNG, PPM, terminal preview).
//!
//! Encoders read a [`crate::framebuffer::PixelBuffer`] and never modify it.

mod png_encoder;
mod ppm;
mod terminal;

pub use png_encoder::PngEncoder;
pub use ppm::PpmEncoder;
pub use terminal::{TerminalEncoder, TerminalMode};
