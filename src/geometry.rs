//! Geometry types for spatial indexing.
//!
//! This module provides the shapes that can be stored and queried in the
//! index:
//! - Rectangles (their own bounding box)
//! - Disks (center + radius)
//! - Polygons (ordered vertex ring)
//!
//! ## Precision model
//!
//! The index only ever prunes by bounding boxes, so `Shape::intersects` is a
//! *conservative* bounding-box overlap test for every variant: it never
//! misses a true intersection but may report overlap where the exact
//! geometries are disjoint. Callers that need exact hits filter the result.
//! `Disk::contains` is the one exact predicate (farthest-corner test).
//! Tightening `intersects` to exact geometry would change the public result
//! set of region searches and is deliberately not done.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::bounding_box::BoundingBox;

/// A 2D coordinate (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance to another coordinate.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A geometric shape that can be stored in the spatial index.
///
/// All variants expose the same capability set: a bounding box (`mbr`),
/// overlap and containment predicates, and an area. The index itself only
/// needs `mbr`; the predicates are applied to leaf entries at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// An axis-aligned rectangle; its own bounding box.
    Rect(BoundingBox),
    /// A disk defined by center and radius.
    Disk { center: Coordinate, radius: f64 },
    /// A polygon defined by its exterior ring.
    Polygon(Vec<Coordinate>),
}

impl Shape {
    /// Creates a rectangle shape.
    pub fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Shape::Rect(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    /// Creates a disk shape.
    pub fn disk(center_x: f64, center_y: f64, radius: f64) -> Self {
        Shape::Disk {
            center: Coordinate::new(center_x, center_y),
            radius,
        }
    }

    /// Creates a polygon from its exterior ring.
    pub fn polygon(points: Vec<Coordinate>) -> Self {
        Shape::Polygon(points)
    }

    /// Returns the kind tag of this shape, as used in the introspection dump.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rect(_) => "Rect",
            Shape::Disk { .. } => "Disk",
            Shape::Polygon(_) => "Polygon",
        }
    }

    /// Returns the minimum bounding rectangle of this shape.
    pub fn mbr(&self) -> BoundingBox {
        match self {
            Shape::Rect(bbox) => *bbox,
            Shape::Disk { center, radius } => BoundingBox::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            Shape::Polygon(points) => {
                if points.is_empty() {
                    return BoundingBox::new(0.0, 0.0, 0.0, 0.0);
                }
                let mut min_x = f64::MAX;
                let mut min_y = f64::MAX;
                let mut max_x = f64::MIN;
                let mut max_y = f64::MIN;
                for p in points {
                    min_x = min_x.min(p.x);
                    min_y = min_y.min(p.y);
                    max_x = max_x.max(p.x);
                    max_y = max_y.max(p.y);
                }
                BoundingBox::new(min_x, min_y, max_x, max_y)
            }
        }
    }

    /// Checks if this shape intersects another shape.
    ///
    /// Conservative for every variant: the test is bounding-box overlap,
    /// with touching edges counting as intersection. See the module docs
    /// for the precision model.
    pub fn intersects(&self, other: &Shape) -> bool {
        self.mbr().intersects(&other.mbr())
    }

    /// Checks if this shape contains another shape.
    ///
    /// Rectangles and polygons test bounding-box containment. Disks test
    /// exactly: the other shape's bounding box is contained iff its corner
    /// farthest from the disk center lies within the radius.
    pub fn contains(&self, other: &Shape) -> bool {
        match self {
            Shape::Rect(bbox) => bbox.contains(&other.mbr()),
            Shape::Disk { center, radius } => {
                let b = other.mbr();
                let dx = (b.min_x - center.x).abs().max((b.max_x - center.x).abs());
                let dy = (b.min_y - center.y).abs().max((b.max_y - center.y).abs());
                dx * dx + dy * dy <= radius * radius
            }
            Shape::Polygon(_) => self.mbr().contains(&other.mbr()),
        }
    }

    /// Returns the area of this shape.
    ///
    /// Polygons report the absolute shoelace area of their exterior ring;
    /// rings with fewer than three vertices have zero area.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Rect(bbox) => bbox.area(),
            Shape::Disk { radius, .. } => std::f64::consts::PI * radius * radius,
            Shape::Polygon(points) => ring_area(points),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rect(bbox) => {
                write!(f, "RECT({}, {}, {}, {})", bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y)
            }
            Shape::Disk { center, radius } => {
                write!(f, "DISK({} {}, {})", center.x, center.y, radius)
            }
            Shape::Polygon(points) => {
                write!(f, "POLYGON((")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", p.x, p.y)?;
                }
                write!(f, "))")
            }
        }
    }
}

/// Absolute value of half the signed shoelace sum over the vertex ring.
fn ring_area(points: &[Coordinate]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum.abs() / 2.0
}
