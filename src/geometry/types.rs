//! Core geometry types for building footprints
//!
//! Points are plain `f64` pairs in an abstract length unit. Polygons are
//! passed around as `&[Point]` slices and are implicitly closed: the last
//! vertex connects back to the first.

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A named building footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub coordinates: Vec<Point>,
}

impl Building {
    pub fn new(name: impl Into<String>, coordinates: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Axis-aligned bounds as [min_x, min_y, max_x, max_y]
    pub fn bounds(&self) -> [f64; 4] {
        self.coordinates.iter().fold(
            [f64::MAX, f64::MAX, f64::MIN, f64::MIN],
            |b, p| [b[0].min(p.x), b[1].min(p.y), b[2].max(p.x), b[3].max(p.y)],
        )
    }
}

/// Iterate the edges of an implicitly closed polygon as (start, end) pairs
pub fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}
