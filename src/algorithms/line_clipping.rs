// src/algorithms/line_clipping.rs

//! # Segment Clipping Module
//!
//! Cohen-Sutherland clipping of line segments against an axis-aligned
//! window. Each endpoint is classified with a 4-bit outcode naming the
//! window half-planes it violates; segments are trivially accepted
//! when both codes are zero, trivially rejected when the codes share a
//! bit, and otherwise shortened one boundary crossing at a time.

use crate::types::{Bounds2D, Point2D, Segment};

pub const INSIDE: u8 = 0;
pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const BOTTOM: u8 = 4;
pub const TOP: u8 = 8;

/// Classifies a point against the four window half-planes.
///
/// LEFT/RIGHT and BOTTOM/TOP are mutually exclusive: a point is left
/// of the window or right of it, never both.
pub fn compute_outcode(point: Point2D, window: &Bounds2D) -> u8 {
    let mut code = INSIDE;

    if point.x < window.min.x {
        code |= LEFT;
    } else if point.x > window.max.x {
        code |= RIGHT;
    }
    if point.y < window.min.y {
        code |= BOTTOM;
    } else if point.y > window.max.y {
        code |= TOP;
    }

    code
}

/// Clips segments against a fixed window.
///
/// The window is closed: endpoints on the boundary are kept.
#[derive(Debug, Clone, Copy)]
pub struct SegmentClipper {
    window: Bounds2D,
}

impl SegmentClipper {
    pub fn new(window: Bounds2D) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Bounds2D {
        &self.window
    }

    /// Returns the sub-segment inside the window, or `None` when the
    /// segment misses the window entirely.
    ///
    /// Converges in at most four crossing resolutions per endpoint.
    pub fn clip(&self, segment: Segment) -> Option<Segment> {
        // A point-like segment has no direction to interpolate along;
        // accept or reject it on its outcode alone.
        if segment.is_degenerate() {
            return if compute_outcode(segment.p1, &self.window) == INSIDE {
                Some(segment)
            } else {
                None
            };
        }

        let window = &self.window;
        let mut p1 = segment.p1;
        let mut p2 = segment.p2;
        let mut outcode1 = compute_outcode(p1, window);
        let mut outcode2 = compute_outcode(p2, window);

        loop {
            if (outcode1 | outcode2) == INSIDE {
                // Trivial accept: both endpoints inside
                return Some(Segment::new(p1, p2));
            }
            if (outcode1 & outcode2) != 0 {
                // Trivial reject: both endpoints beyond the same boundary
                return None;
            }

            // At least one endpoint is outside. Resolve its crossing
            // with one violated boundary, checked top, bottom, right,
            // left. The divisor cannot vanish: a segment parallel to
            // the checked boundary would have put the bit in both
            // outcodes and been rejected above.
            let outcode_out = if outcode1 != INSIDE { outcode1 } else { outcode2 };

            let crossing = if (outcode_out & TOP) != 0 {
                let x = p1.x + (p2.x - p1.x) * (window.max.y - p1.y) / (p2.y - p1.y);
                Point2D::new(x, window.max.y)
            } else if (outcode_out & BOTTOM) != 0 {
                let x = p1.x + (p2.x - p1.x) * (window.min.y - p1.y) / (p2.y - p1.y);
                Point2D::new(x, window.min.y)
            } else if (outcode_out & RIGHT) != 0 {
                let y = p1.y + (p2.y - p1.y) * (window.max.x - p1.x) / (p2.x - p1.x);
                Point2D::new(window.max.x, y)
            } else {
                let y = p1.y + (p2.y - p1.y) * (window.min.x - p1.x) / (p2.x - p1.x);
                Point2D::new(window.min.x, y)
            };

            if outcode_out == outcode1 {
                p1 = crossing;
                outcode1 = compute_outcode(p1, window);
            } else {
                p2 = crossing;
                outcode2 = compute_outcode(p2, window);
            }
        }
    }
}

/// Clips a single segment against a window.
pub fn clip_segment(segment: Segment, window: &Bounds2D) -> Option<Segment> {
    SegmentClipper::new(*window).clip(segment)
}

/// Clips a batch of segments, dropping those that miss the window.
pub fn clip_segments(segments: &[Segment], window: &Bounds2D) -> Vec<Segment> {
    let clipper = SegmentClipper::new(*window);
    segments.iter().filter_map(|&s| clipper.clip(s)).collect()
}
