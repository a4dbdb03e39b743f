//! Rasterization of geometric primitives.
//!
//! Every algorithm here works on the integer pixel grid with integer-only
//! arithmetic and writes through the clipping accessors of
//! [`PixelBuffer`], so no rasterizer can touch a pixel outside the buffer.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: error-accumulating 8-connected line
//! - **Midpoint Circle**: eight-way symmetric circle outline
//! - **Scanline Fill**: per-row edge interpolation for triangles
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod circle;
mod line;
mod triangle;

pub use circle::{circle_points, draw_circle};
pub use line::{draw_line, line_points, LinePoints};
pub use triangle::{fill_triangle, triangle_spans, triangle_spans_in, Span, TriangleSpans};

use crate::color::Rgb;
use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Circle, Line, Point, Triangle};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Rasterize this primitive into a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid shape parameters (e.g. a negative
    /// circle radius); coordinates outside the buffer are clipped.
    fn draw(&self, buf: &mut PixelBuffer, color: Rgb) -> Result<()>;
}

impl Drawable for Point {
    fn draw(&self, buf: &mut PixelBuffer, color: Rgb) -> Result<()> {
        buf.set_pixel(self.x, self.y, color);
        Ok(())
    }
}

impl Drawable for Line {
    fn draw(&self, buf: &mut PixelBuffer, color: Rgb) -> Result<()> {
        draw_line(buf, self.start.x, self.start.y, self.end.x, self.end.y, color);
        Ok(())
    }
}

impl Drawable for Circle {
    fn draw(&self, buf: &mut PixelBuffer, color: Rgb) -> Result<()> {
        draw_circle(buf, self.center.x, self.center.y, self.radius, color)
    }
}

impl Drawable for Triangle {
    fn draw(&self, buf: &mut PixelBuffer, color: Rgb) -> Result<()> {
        let [a, b, c] = self.vertices;
        fill_triangle(buf, a, b, c, color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> PixelBuffer {
        PixelBuffer::new(100, 100, Rgb::WHITE).expect("buffer creation should succeed")
    }

    #[test]
    fn test_drawable_trait_point() {
        let mut buf = buffer();
        Point::new(50, 50).draw(&mut buf, Rgb::BLUE).unwrap();

        assert_eq!(buf.get(50, 50).unwrap(), Rgb::BLUE);
        assert_eq!(buf.count_color(Rgb::BLUE), 1);
    }

    #[test]
    fn test_drawable_trait_line() {
        let mut buf = buffer();
        Line::from_coords(10, 10, 90, 90).draw(&mut buf, Rgb::BLACK).unwrap();

        assert_eq!(buf.get(50, 50).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_drawable_trait_circle() {
        let mut buf = buffer();
        Circle::new(Point::new(50, 50), 20).draw(&mut buf, Rgb::GREEN).unwrap();

        assert_eq!(buf.get(70, 50).unwrap(), Rgb::GREEN);
        assert!(Circle::new(Point::ORIGIN, -2).draw(&mut buf, Rgb::GREEN).is_err());
    }

    #[test]
    fn test_drawable_trait_triangle() {
        let mut buf = buffer();
        Triangle::new(Point::new(10, 10), Point::new(90, 10), Point::new(50, 90))
            .draw(&mut buf, Rgb::RED)
            .unwrap();

        assert_eq!(buf.get(50, 40).unwrap(), Rgb::RED);
        assert_eq!(buf.get(5, 5).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_drawables_as_trait_objects() {
        let mut buf = buffer();
        let shapes: Vec<Box<dyn Drawable>> = vec![
            Box::new(Line::from_coords(0, 0, 99, 0)),
            Box::new(Circle::new(Point::new(50, 50), 10)),
            Box::new(Triangle::new(Point::new(0, 90), Point::new(10, 80), Point::new(20, 99))),
        ];

        for shape in &shapes {
            shape.draw(&mut buf, Rgb::BLACK).unwrap();
        }

        assert_eq!(buf.get(99, 0).unwrap(), Rgb::BLACK);
        assert_eq!(buf.get(60, 50).unwrap(), Rgb::BLACK);
    }
}
