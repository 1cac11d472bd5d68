//! Core data types for the image viewport.
//! Everything here is plain data; the behaviour lives in `state`.

use serde::{Deserialize, Serialize};

/// Lower zoom bound, owned by the viewport controller.
pub const MIN_ZOOM: f64 = 0.1;
/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 5.0;
/// Share of the viewport a freshly loaded image may occupy.
pub const FIT_FRACTION: f64 = 0.8;
/// Smallest width/height (scene units) a resize gesture may produce.
pub const MIN_BOX_SIZE: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    /// Rotates around the origin by `deg` degrees (clockwise on a y-down canvas).
    pub fn rotate(self, deg: f64) -> Point {
        let (sin, cos) = deg.to_radians().sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero, negative or NaN sizes are treated as "not known yet".
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Smallest rect containing all points; `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Rect> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}

/// Metadata of an image the user picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    pub id: String,
    pub url: String,
    pub mime_type: String,
    /// Bytes, 0 when unknown.
    pub size: u64,
}

impl ImageFile {
    /// Builds an entry for a bare URL; the id is the URL itself and the
    /// mime type is guessed from the extension.
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();
        let ext = url
            .rsplit('/')
            .next()
            .and_then(|name| name.split(['?', '#']).next())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let mime_type = match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        };
        Self {
            id: url.to_string(),
            url: url.to_string(),
            mime_type: mime_type.to_string(),
            size: 0,
        }
    }
}

/// Where the image sits in scene space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    /// Top-left corner of the unrotated image, also the rotation origin.
    pub position: Point,
    pub scale: Point,
    /// Degrees.
    pub rotation: f64,
}

/// What the renderer node currently shows. During a transform gesture the
/// `multiplier` is applied on top of the stored placement scale; at rest it
/// is `(1, 1)` and `position`/`rotation` mirror the placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTransform {
    pub position: Point,
    pub multiplier: Point,
    pub rotation: f64,
}

impl NodeTransform {
    pub fn at_rest(placement: &ImagePlacement) -> Self {
        Self {
            position: placement.position,
            multiplier: Point::new(1.0, 1.0),
            rotation: placement.rotation,
        }
    }
}

/// Oriented bounding box handed to the resize floor check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_quarter_turn() {
        let p = Point::new(1.0, 0.0).rotate(90.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_dimension() {
        assert!(Dimension::new(0.0, 10.0).is_empty());
        assert!(Dimension::new(10.0, f64::NAN).is_empty());
        assert!(!Dimension::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn enclosing_rect() {
        let r = Rect::enclosing(&[
            Point::new(1.0, 5.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(r, Rect { x: -2.0, y: -1.0, width: 6.0, height: 6.0 });
        assert!(Rect::enclosing(&[]).is_none());
    }

    #[test]
    fn image_file_guesses_mime() {
        let f = ImageFile::from_url(" https://cdn.example.com/a/b/photo.JPG?v=2 ");
        assert_eq!(f.url, "https://cdn.example.com/a/b/photo.JPG?v=2");
        assert_eq!(f.mime_type, "image/jpeg");
        assert_eq!(ImageFile::from_url("https://x.io/raw").mime_type, "application/octet-stream");
    }
}
