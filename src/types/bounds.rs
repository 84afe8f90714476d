// src/types/bounds.rs

use crate::error::{GeometryError, GeometryResult};
use crate::types::Point2D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned clip window (2D bounding box).
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. Windows with zero
/// width or height are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Creates a window, rejecting inverted extents
    pub fn new(min: Point2D, max: Point2D) -> GeometryResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(GeometryError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a window from raw extents
    pub fn from_extents(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> GeometryResult<Self> {
        Self::new(Point2D::new(xmin, ymin), Point2D::new(xmax, ymax))
    }

    /// Creates a window from two arbitrary opposite corners
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: Point2D::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2D::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Tightest window enclosing all points, `None` for an empty iterator
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Checks ordering and finiteness of the extents
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Closed containment: boundary points count as inside
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// The four corners, counter-clockwise from the minimum corner.
    /// This is the window expressed as a convex clipper polygon.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }

    /// Grows the window by a margin on all sides
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Smallest window covering both windows
    pub fn union(&self, other: &Bounds2D) -> Self {
        Self {
            min: Point2D::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2D::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D(({}, {}) to ({}, {}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
