//! Geometric primitives on the integer pixel grid.
//!
//! All coordinates are `i32`. Shapes may extend past the buffer; clipping
//! happens at write time in [`crate::framebuffer::PixelBuffer`].

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "scene", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "scene", serde(from = "[i32; 2]", into = "[i32; 2]"))]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, growing downwards).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, i.e. the number of king moves between two pixels.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy) as u32
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A line segment between two pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Number of pixels a Bresenham rasterization of this segment visits.
    #[must_use]
    pub fn pixel_len(&self) -> u64 {
        u64::from(self.start.chebyshev(self.end)) + 1
    }
}

/// A circle outline given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels. Negative values are rejected when drawn.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// A triangle given by three vertices in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle {
    /// The vertices, as supplied.
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Vertices sorted by ascending y.
    ///
    /// The sort is stable, so vertices sharing a row keep their input order.
    #[must_use]
    pub fn sorted_by_y(&self) -> [Point; 3] {
        let mut sorted = self.vertices;
        sorted.sort_by_key(|p| p.y);
        sorted
    }

    /// True when all three vertices lie on one row (zero height).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.vertices;
        a.y == b.y && b.y == c.y
    }

    /// Half-open row range `[min_y, max_y)` covered by the scanline fill.
    #[must_use]
    pub fn row_range(&self) -> std::ops::Range<i32> {
        let [top, _, bottom] = self.sorted_by_y();
        top.y..bottom.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_conversions() {
        assert_eq!(Point::from((3, 4)), Point::new(3, 4));
        assert_eq!(Point::from([3, 4]), Point::new(3, 4));
        let arr: [i32; 2] = Point::new(-1, 7).into();
        assert_eq!(arr, [-1, 7]);
    }

    #[test]
    fn test_chebyshev() {
        assert_eq!(Point::new(0, 0).chebyshev(Point::new(3, -7)), 7);
        assert_eq!(Point::new(5, 5).chebyshev(Point::new(5, 5)), 0);
        assert_eq!(Point::new(i32::MIN, 0).chebyshev(Point::new(i32::MAX, 0)), u32::MAX);
    }

    #[test]
    fn test_line_pixel_len() {
        assert_eq!(Line::from_coords(20, 20, 180, 120).pixel_len(), 161);
        assert_eq!(Line::from_coords(4, 4, 4, 4).pixel_len(), 1);
    }

    #[test]
    fn test_triangle_sort() {
        let t = Triangle::new(Point::new(100, 150), Point::new(160, 60), Point::new(30, 50));
        assert_eq!(
            t.sorted_by_y(),
            [Point::new(30, 50), Point::new(160, 60), Point::new(100, 150)]
        );
        assert_eq!(t.row_range(), 50..150);
    }

    #[test]
    fn test_triangle_degenerate() {
        let flat = Triangle::new(Point::new(0, 5), Point::new(10, 5), Point::new(20, 5));
        assert!(flat.is_degenerate());
        assert!(flat.row_range().is_empty());

        let thin = Triangle::new(Point::new(0, 5), Point::new(10, 5), Point::new(20, 6));
        assert!(!thin.is_degenerate());
    }
}
