// src/types/segment.rs

use super::Point2D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite line segment between two endpoints.
///
/// The order of `p1` and `p2` matters only for the orientation of
/// clipped output, not for membership.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point2D,
    pub p2: Point2D,
}

impl Segment {
    pub fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    /// Builds a segment directly from endpoint coordinates
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    /// A segment whose endpoints coincide has no direction vector
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Endpoint difference `p2 - p1`
    pub fn delta(&self) -> Point2D {
        self.p2 - self.p1
    }

    pub fn length(&self) -> f32 {
        self.delta().length()
    }
}

impl From<(Point2D, Point2D)> for Segment {
    fn from((p1, p2): (Point2D, Point2D)) -> Self {
        Self::new(p1, p2)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment(({}, {}) -> ({}, {}))",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}
