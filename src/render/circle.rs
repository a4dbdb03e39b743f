//! Midpoint circle rasterization.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;
use crate::geometry::Point;

/// Walk the first octant of a midpoint circle and hand every one of the
/// eight reflected points to `plot`.
///
/// Offsets are added in `i64`; points that fall outside the `i32` range
/// cannot be in any buffer and are dropped.
fn for_each_circle_point(center: Point, radius: i32, mut plot: impl FnMut(Point)) -> Result<()> {
    if radius < 0 {
        return Err(Error::NegativeRadius(radius));
    }

    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let mut emit = |dx: i64, dy: i64| {
        if let (Ok(x), Ok(y)) = (i32::try_from(cx + dx), i32::try_from(cy + dy)) {
            plot(Point::new(x, y));
        }
    };

    let mut x = i64::from(radius);
    let mut y = 0_i64;
    let mut p = 1 - x;

    while x >= y {
        emit(x, y);
        emit(y, x);
        emit(-x, y);
        emit(-y, x);
        emit(-x, -y);
        emit(-y, -x);
        emit(x, -y);
        emit(y, -x);

        y += 1;
        if p <= 0 {
            p += 2 * y + 1;
        } else {
            x -= 1;
            p += 2 * y - 2 * x + 1;
        }
    }

    Ok(())
}

/// Compute the pixels of a circle outline.
///
/// Every midpoint step contributes its eight reflections, so points on the
/// octant boundaries (the axes and diagonals) may appear more than once.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`] if `radius < 0`.
pub fn circle_points(center: Point, radius: i32) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for_each_circle_point(center, radius, |p| points.push(p))?;
    Ok(points)
}

/// Draw a circle outline using the midpoint algorithm.
///
/// A radius of zero plots only the center. Points outside the buffer are
/// skipped.
///
/// # Arguments
///
/// * `buf` - Target pixel buffer
/// * `cx`, `cy` - Center coordinates
/// * `radius` - Circle radius in pixels
/// * `color` - Outline color
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`] if `radius < 0`; nothing is drawn.
pub fn draw_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Rgb) -> Result<()> {
    log::trace!("circle at ({cx}, {cy}) r={radius} in {color}");

    for_each_circle_point(Point::new(cx, cy), radius, |p| {
        buf.set_pixel(p.x, p.y, color);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn buffer() -> PixelBuffer {
        PixelBuffer::new(200, 200, Rgb::WHITE).expect("buffer creation should succeed")
    }

    #[test]
    fn test_draw_circle_outline() {
        let mut buf = buffer();
        draw_circle(&mut buf, 100, 100, 40, Rgb::BLUE).unwrap();

        // Axis extremes are on the outline
        assert_eq!(buf.get(140, 100).unwrap(), Rgb::BLUE);
        assert_eq!(buf.get(60, 100).unwrap(), Rgb::BLUE);
        assert_eq!(buf.get(100, 140).unwrap(), Rgb::BLUE);
        assert_eq!(buf.get(100, 60).unwrap(), Rgb::BLUE);
        // Center stays untouched (outline only)
        assert_eq!(buf.get(100, 100).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut buf = buffer();
        draw_circle(&mut buf, 50, 50, 0, Rgb::RED).unwrap();

        assert_eq!(buf.get(50, 50).unwrap(), Rgb::RED);
        assert_eq!(buf.count_color(Rgb::RED), 1);
    }

    #[test]
    fn test_circle_negative_radius_is_error() {
        let mut buf = buffer();
        let result = draw_circle(&mut buf, 50, 50, -1, Rgb::RED);

        assert!(matches!(result, Err(Error::NegativeRadius(-1))));
        assert_eq!(buf.count_color(Rgb::RED), 0);
        assert!(circle_points(Point::ORIGIN, -5).is_err());
    }

    #[test]
    fn test_radius_one_is_ring_of_neighbours() {
        let pts: HashSet<Point> = circle_points(Point::new(5, 5), 1).unwrap().into_iter().collect();
        let expected: HashSet<Point> = [(4, 4), (5, 4), (6, 4), (4, 5), (6, 5), (4, 6), (5, 6), (6, 6)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn test_points_stay_near_true_radius() {
        let r = 40;
        for p in circle_points(Point::ORIGIN, r).unwrap() {
            let d2 = p.x * p.x + p.y * p.y;
            // Within one pixel of the ideal circle
            assert!(d2 >= (r - 1) * (r - 1) && d2 <= (r + 1) * (r + 1), "{p:?} too far");
        }
    }

    #[test]
    fn test_circle_clipped_at_edges() {
        let mut buf = PixelBuffer::new(20, 20, Rgb::WHITE).unwrap();
        draw_circle(&mut buf, 0, 0, 10, Rgb::GREEN).unwrap();

        assert_eq!(buf.get(10, 0).unwrap(), Rgb::GREEN);
        assert_eq!(buf.get(0, 10).unwrap(), Rgb::GREEN);
        assert!(buf.count_color(Rgb::GREEN) > 0);
    }

    #[test]
    fn test_extreme_center_drops_unrepresentable_points() {
        let pts = circle_points(Point::new(i32::MAX, i32::MAX), 3).unwrap();
        assert!(pts.contains(&Point::new(i32::MAX - 3, i32::MAX)));
        assert!(pts.contains(&Point::new(i32::MAX, i32::MAX - 3)));
        // Only offsets pointing back toward the origin survive
        assert!(pts.iter().all(|p| p.x >= i32::MAX - 3 && p.y >= i32::MAX - 3));
    }
}
