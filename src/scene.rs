//! Declarative scenes: a canvas plus a list of shapes, loaded from YAML.
//!
//! ```yaml
//! canvas:
//!   width: 200
//!   height: 200
//!   background: white
//! shapes:
//!   - kind: line
//!     from: [20, 20]
//!     to: [180, 120]
//!     color: red
//!   - kind: circle
//!     center: [100, 100]
//!     radius: 40
//!     color: blue
//!   - kind: triangle
//!     vertices: [[30, 50], [100, 150], [160, 60]]
//!     color: green
//! ```
//!
//! Shape kinds form a closed set. An entry with an unrecognised `kind` is
//! kept as [`Shape::Unknown`], logged and skipped at render time.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Circle, Line, Point, Triangle};
use crate::render::Drawable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas settings for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Background color the buffer starts with.
    #[serde(default = "default_background")]
    pub background: Rgb,
}

fn default_size() -> u32 {
    200
}
fn default_background() -> Rgb {
    Rgb::WHITE
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: default_size(), height: default_size(), background: default_background() }
    }
}

/// Geometry of one scene entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Bresenham line between two points.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Midpoint circle outline.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: i32,
    },
    /// Scanline-filled triangle.
    Triangle {
        /// The three vertices, in any order.
        vertices: [Point; 3],
    },
    /// Any other `kind`; skipped when rendering.
    #[serde(other)]
    Unknown,
}

/// One colored shape in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// Shape geometry, tagged by `kind`.
    #[serde(flatten)]
    pub shape: Shape,

    /// Draw color.
    #[serde(default = "default_shape_color")]
    pub color: Rgb,
}

fn default_shape_color() -> Rgb {
    Rgb::BLACK
}

impl ShapeSpec {
    /// Create a colored shape.
    #[must_use]
    pub const fn new(shape: Shape, color: Rgb) -> Self {
        Self { shape, color }
    }
}

impl Drawable for Shape {
    fn draw(&self, buf: &mut PixelBuffer, color: Rgb) -> Result<()> {
        match *self {
            Self::Line { from, to } => Line::new(from, to).draw(buf, color),
            Self::Circle { center, radius } => Circle::new(center, radius).draw(buf, color),
            Self::Triangle { vertices: [a, b, c] } => Triangle::new(a, b, c).draw(buf, color),
            Self::Unknown => {
                log::warn!("skipping shape of unknown kind");
                Ok(())
            }
        }
    }
}

/// A canvas and the shapes drawn onto it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene format version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: Canvas,

    /// Shapes, drawn first to last.
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

fn default_version() -> u32 {
    1
}

impl Default for Scene {
    fn default() -> Self {
        Self { version: default_version(), canvas: Canvas::default(), shapes: Vec::new() }
    }
}

impl Scene {
    /// Creates an empty scene on the default canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canvas.
    #[must_use]
    pub fn with_canvas(mut self, width: u32, height: u32, background: Rgb) -> Self {
        self.canvas = Canvas { width, height, background };
        self
    }

    /// Append a shape.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape, color: Rgb) -> Self {
        self.shapes.push(ShapeSpec::new(shape, color));
        self
    }

    /// Loads a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses a scene from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneParse`] with the offending line if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::SceneParse { line, message: e.to_string() }
        })
    }

    /// Loads a scene, falling back to the default on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serializes the scene to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| Error::SceneParse { line: 0, message: e.to_string() })
    }

    /// Rasterize the scene onto a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid canvas dimensions or an invalid shape
    /// (negative radius).
    pub fn render(&self) -> Result<PixelBuffer> {
        let mut buf =
            PixelBuffer::new(self.canvas.width, self.canvas.height, self.canvas.background)?;

        for spec in &self.shapes {
            spec.shape.draw(&mut buf, spec.color)?;
        }

        log::debug!(
            "rendered scene with {} shapes onto {}x{} canvas",
            self.shapes.len(),
            self.canvas.width,
            self.canvas.height
        );
        Ok(buf)
    }

    /// The three reference drawings: a line, a circle and a triangle, each on
    /// its own 200x200 white canvas. Returned as `(name, scene)` pairs.
    #[must_use]
    pub fn samples() -> Vec<(&'static str, Self)> {
        vec![
            (
                "line",
                Self::new().with_shape(
                    Shape::Line { from: Point::new(20, 20), to: Point::new(180, 120) },
                    Rgb::RED,
                ),
            ),
            (
                "circle",
                Self::new()
                    .with_shape(Shape::Circle { center: Point::new(100, 100), radius: 40 }, Rgb::BLUE),
            ),
            (
                "triangle",
                Self::new().with_shape(
                    Shape::Triangle {
                        vertices: [Point::new(30, 50), Point::new(100, 150), Point::new(160, 60)],
                    },
                    Rgb::GREEN,
                ),
            ),
        ]
    }
}

/// Render independent scenes onto independent buffers.
///
/// With the `parallel` feature each scene is rendered on the rayon pool;
/// buffers are never shared between threads. Output order matches input.
///
/// # Errors
///
/// Returns the first error encountered.
pub fn render_many(scenes: &[Scene]) -> Result<Vec<PixelBuffer>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        scenes.par_iter().map(Scene::render).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        scenes.iter().map(Scene::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = r"
version: 1
canvas:
  width: 200
  height: 200
  background: white
shapes:
  - kind: line
    from: [20, 20]
    to: [180, 120]
    color: red
  - kind: circle
    center: [100, 100]
    radius: 40
    color: '#0000ff'
  - kind: triangle
    vertices: [[30, 50], [100, 150], [160, 60]]
    color: green
";

    #[test]
    fn test_default_scene() {
        let scene = Scene::new();
        assert_eq!(scene.version, 1);
        assert_eq!(scene.canvas, Canvas::default());
        assert!(scene.shapes.is_empty());
    }

    #[test]
    fn test_parse_sample() {
        let scene = Scene::parse(SAMPLE_YAML).unwrap();

        assert_eq!(scene.shapes.len(), 3);
        assert_eq!(
            scene.shapes[0],
            ShapeSpec::new(
                Shape::Line { from: Point::new(20, 20), to: Point::new(180, 120) },
                Rgb::RED
            )
        );
        assert_eq!(scene.shapes[1].color, Rgb::BLUE);
        assert!(matches!(scene.shapes[2].shape, Shape::Triangle { .. }));
    }

    #[test]
    fn test_parse_minimal_uses_defaults() {
        let scene = Scene::parse("shapes: []").unwrap();
        assert_eq!(scene.canvas.width, 200);
        assert_eq!(scene.canvas.background, Rgb::WHITE);

        let scene = Scene::parse("canvas:\n  width: 64\n").unwrap();
        assert_eq!(scene.canvas.width, 64);
        assert_eq!(scene.canvas.height, 200);
    }

    #[test]
    fn test_shape_color_defaults_to_black() {
        let scene = Scene::parse("shapes:\n  - kind: circle\n    center: [5, 5]\n    radius: 2\n")
            .unwrap();
        assert_eq!(scene.shapes[0].color, Rgb::BLACK);
    }

    #[test]
    fn test_unknown_kind_is_kept_and_skipped() {
        let yaml = "shapes:\n  - kind: hexagon\n    color: grey\n  - kind: circle\n    center: [10, 10]\n    radius: 0\n    color: red\n";
        let scene = Scene::parse(yaml).unwrap();

        assert_eq!(scene.shapes[0].shape, Shape::Unknown);
        assert_eq!(scene.shapes[0].color, Rgb::GREY);

        let buf = scene.with_canvas(20, 20, Rgb::WHITE).render().unwrap();
        assert_eq!(buf.count_color(Rgb::RED), 1);
        assert_eq!(buf.count_color(Rgb::GREY), 0);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = Scene::parse("canvas:\n  width: wide\n").unwrap_err();
        match err {
            Error::SceneParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let yaml = "shapes:\n  - kind: line\n    from: [0, 0]\n    to: [1, 1]\n    color: notacolor\n";
        assert!(matches!(Scene::parse(yaml), Err(Error::SceneParse { .. })));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let scene = Scene::parse(SAMPLE_YAML).unwrap();
        let yaml = scene.to_yaml().unwrap();
        assert_eq!(Scene::parse(&yaml).unwrap(), scene);
    }

    #[test]
    fn test_render_empty_scene_is_background() {
        let buf = Scene::new().with_canvas(16, 8, Rgb::YELLOW).render().unwrap();
        assert_eq!(buf.count_color(Rgb::YELLOW), 128);
    }

    #[test]
    fn test_render_invalid_canvas() {
        let scene = Scene::new().with_canvas(0, 10, Rgb::WHITE);
        assert!(matches!(scene.render(), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_render_oversized_canvas_fails() {
        let scene = Scene::parse("canvas:\n  width: 100000\n  height: 100000\n").unwrap();
        assert!(matches!(
            scene.render(),
            Err(Error::InvalidDimensions { width: 100_000, height: 100_000 })
        ));
    }

    #[test]
    fn test_render_negative_radius_fails() {
        let scene = Scene::new()
            .with_shape(Shape::Circle { center: Point::new(5, 5), radius: -4 }, Rgb::RED);
        assert!(matches!(scene.render(), Err(Error::NegativeRadius(-4))));
    }

    #[test]
    fn test_samples_render() {
        let samples = Scene::samples();
        let names: Vec<&str> = samples.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["line", "circle", "triangle"]);

        let scenes: Vec<Scene> = samples.into_iter().map(|(_, s)| s).collect();
        let buffers = render_many(&scenes).unwrap();

        assert_eq!(buffers[0].count_color(Rgb::RED), 161);
        assert_eq!(buffers[1].get(140, 100).unwrap(), Rgb::BLUE);
        assert_eq!(buffers[2].get(100, 100).unwrap(), Rgb::GREEN);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let scene = Scene::load_or_default("/nonexistent/scene.yaml");
        assert_eq!(scene, Scene::default());
    }
}
