//! Bresenham line rasterization.

use crate::color::Rgb;
use crate::framebuffer::PixelBuffer;
use crate::geometry::Point;

/// Iterator over the pixels of a Bresenham line.
///
/// Produced by [`line_points`]. Yields exactly `max(|dx|, |dy|) + 1` points,
/// each 8-connected to the previous one.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    remaining: u64,
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // x and y never leave the endpoints' bounding box, so they fit in i32.
        let current = Point::new(self.x as i32, self.y as i32);

        if self.x == self.x1 && self.y == self.y1 {
            self.remaining = 0;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

/// Trace the Bresenham path between two pixels.
///
/// The path is always walked from the lexicographically smaller endpoint
/// (by `x`, then `y`), so `line_points(a, b)` and `line_points(b, a)` cover
/// the same pixels. The error term is kept in `i64`; any pair of `i32`
/// endpoints is safe.
///
/// # Example
///
/// ```
/// use rasterkit::geometry::Point;
/// use rasterkit::render::line_points;
///
/// let pts: Vec<Point> = line_points(Point::new(0, 0), Point::new(3, 1)).collect();
/// assert_eq!(pts.len(), 4);
/// assert_eq!(pts[0], Point::new(0, 0));
/// assert_eq!(pts[3], Point::new(3, 1));
/// ```
#[must_use]
pub fn line_points(start: Point, end: Point) -> LinePoints {
    let (from, to) = if end < start { (end, start) } else { (start, end) };

    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    LinePoints {
        x: x0,
        y: y0,
        x1,
        y1,
        dx,
        dy,
        sx,
        sy,
        err: dx - dy,
        remaining: dx.max(dy) as u64 + 1,
    }
}

/// Draw a line using Bresenham's algorithm.
///
/// Pixels outside the buffer are skipped without cutting the line short.
/// A zero-length line plots its single pixel.
///
/// # Arguments
///
/// * `buf` - Target pixel buffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
    log::trace!("line ({x0}, {y0}) -> ({x1}, {y1}) in {color}");

    for p in line_points(Point::new(x0, y0), Point::new(x1, y1)) {
        buf.set_pixel(p.x, p.y, color);
    }
}
