//! # rasterkit
//!
//! Integer-only rasterization of lines, circles and filled triangles into an
//! RGB pixel buffer.
//!
//! The three rasterizers are stateless free functions. Each takes the
//! [`PixelBuffer`](framebuffer::PixelBuffer) by mutable reference, writes the
//! pixels it covers and returns. Writes outside the buffer are clipped
//! silently; misuse of the public API (zero-sized buffers, negative radii,
//! out-of-range reads) is reported through [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterkit::prelude::*;
//!
//! let mut buf = PixelBuffer::new(200, 200, Rgb::WHITE)?;
//!
//! draw_line(&mut buf, 20, 20, 180, 120, Rgb::RED);
//! draw_circle(&mut buf, 100, 100, 40, Rgb::BLUE)?;
//! fill_triangle(
//!     &mut buf,
//!     Point::new(30, 50),
//!     Point::new(100, 150),
//!     Point::new(160, 60),
//!     Rgb::GREEN,
//! );
//!
//! let png = PngEncoder::to_bytes(&buf)?;
//! assert!(!png.is_empty());
//! # Ok::<(), rasterkit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `scene` (default): YAML scene descriptions via serde
//! - `parallel`: render independent scenes on the rayon pool
//! - `cli`: the `raster-demo` driver binary
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*, 2nd ed., ch. 3.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in pixel arithmetic
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type.
pub mod color;

/// Pixel buffer the rasterizers write into.
pub mod framebuffer;

/// Integer geometric primitives (points, lines, circles, triangles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Output encoders (PNG, PPM, terminal).
pub mod output;

/// Declarative YAML scenes.
#[cfg(feature = "scene")]
#[cfg_attr(docsrs, doc(cfg(feature = "scene")))]
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterkit operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use rasterkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::PixelBuffer;
    pub use crate::geometry::{Circle, Line, Point, Triangle};
    pub use crate::output::{PngEncoder, PpmEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{
        circle_points, draw_circle, draw_line, fill_triangle, line_points, triangle_spans,
        triangle_spans_in, Drawable, Span,
    };
    #[cfg(feature = "scene")]
    pub use crate::scene::{render_many, Scene, Shape, ShapeSpec};
}
