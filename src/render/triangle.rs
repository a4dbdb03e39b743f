//! Scanline triangle fill.
//!
//! Vertices are sorted by `y` into top, middle and bottom. The long edge
//! (top to bottom) gives one x-boundary per row; the two short edges (top to
//! middle, then middle to bottom) give the other. Each row in the half-open
//! range `[top.y, bottom.y)` is filled between the two boundaries, so the
//! bottom vertex row is never drawn.

use crate::color::Rgb;
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Point, Triangle};
use std::ops::Range;

/// One filled row of a triangle, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Row.
    pub y: i32,
    /// Leftmost filled column.
    pub x_start: i32,
    /// Rightmost filled column.
    pub x_end: i32,
}

impl Span {
    /// Number of pixels in the span (always at least one).
    #[must_use]
    pub fn width(&self) -> u64 {
        (i64::from(self.x_end) - i64::from(self.x_start) + 1) as u64
    }
}

/// x-coordinate of the edge `from -> to` on row `y`.
///
/// Evaluated exactly in integers and truncated toward zero. Callers only ask
/// for rows in `[from.y, to.y)` with `from.y < to.y`, so the result lies
/// between the two vertex xs. Products of two `i32` spans need 64 bits plus
/// sign, hence `i128`.
fn edge_x(from: Point, to: Point, y: i32) -> i32 {
    let (x0, y0) = (i128::from(from.x), i128::from(from.y));
    let (x1, y1) = (i128::from(to.x), i128::from(to.y));
    let dy = y1 - y0;

    ((x0 * dy + (x1 - x0) * (i128::from(y) - y0)) / dy) as i32
}

/// Lazy iterator over the spans of a triangle, one per row.
///
/// Produced by [`triangle_spans_in`]. Each span is computed on demand, so
/// the cost depends only on the rows visited, not on the triangle's extent.
#[derive(Debug, Clone)]
pub struct TriangleSpans {
    top: Point,
    mid: Point,
    bottom: Point,
    rows: Range<i32>,
}

impl TriangleSpans {
    fn span_at(&self, y: i32) -> Span {
        // The short side switches edges at the middle vertex row.
        let short = if y < self.mid.y {
            edge_x(self.top, self.mid, y)
        } else {
            edge_x(self.mid, self.bottom, y)
        };
        let long = edge_x(self.top, self.bottom, y);

        Span { y, x_start: short.min(long), x_end: short.max(long) }
    }
}

impl Iterator for TriangleSpans {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let y = self.rows.next()?;
        Some(self.span_at(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for TriangleSpans {}

/// Spans of a triangle restricted to the rows in `rows`.
///
/// Only rows covered by both boundaries (the long edge and the short edge
/// pair) are visited, which is `[top.y, bottom.y)` intersected with `rows`.
/// A degenerate (zero-height) triangle yields nothing.
#[must_use]
pub fn triangle_spans_in(triangle: &Triangle, rows: Range<i32>) -> TriangleSpans {
    let [top, mid, bottom] = triangle.sorted_by_y();
    let covered = triangle.row_range();
    let rows = covered.start.max(rows.start)..covered.end.min(rows.end);

    TriangleSpans { top, mid, bottom, rows }
}

/// Compute the horizontal spans covering a triangle.
///
/// Returns no spans for a degenerate (zero-height) triangle. This collects
/// every row of the triangle; for large triangles prefer
/// [`triangle_spans_in`] with the rows actually needed.
///
/// # Example
///
/// ```
/// use rasterkit::geometry::{Point, Triangle};
/// use rasterkit::render::triangle_spans;
///
/// let t = Triangle::new(Point::new(0, 0), Point::new(4, 4), Point::new(0, 4));
/// let spans = triangle_spans(&t);
/// assert_eq!(spans.len(), 4);
/// assert_eq!((spans[0].x_start, spans[0].x_end), (0, 0));
/// ```
#[must_use]
pub fn triangle_spans(triangle: &Triangle) -> Vec<Span> {
    triangle_spans_in(triangle, i32::MIN..i32::MAX).collect()
}

/// Fill a triangle using scanline interpolation.
///
/// Vertex order does not matter. A triangle whose vertices all share one row
/// draws nothing. Only rows inside the buffer are visited; pixels outside it
/// are skipped.
pub fn fill_triangle(buf: &mut PixelBuffer, p1: Point, p2: Point, p3: Point, color: Rgb) {
    let triangle = Triangle::new(p1, p2, p3);
    if triangle.is_degenerate() {
        log::trace!("skipping zero-height triangle at row {}", p1.y);
        return;
    }

    let height = i32::try_from(buf.height()).unwrap_or(i32::MAX);
    let mut written = 0;
    for span in triangle_spans_in(&triangle, 0..height) {
        written += buf.fill_span(span.y, span.x_start, span.x_end, color);
    }

    log::trace!(
        "triangle ({}, {}) ({}, {}) ({}, {}) in {color}: {written} pixels",
        p1.x,
        p1.y,
        p2.x,
        p2.y,
        p3.x,
        p3.y
    );
}
