// src/algorithms/clipping.rs

//! # Polygon Clipping Module
//!
//! Sutherland-Hodgman clipping of a subject polygon against a convex
//! clipper polygon. The subject is folded over the clipper's edges one
//! at a time, each pass keeping the portion of the working polygon on
//! the inner side of that edge.

use crate::geometry::polygon::Polygon;
use crate::types::{Bounds2D, Point2D};

/// Performs polygon clipping against convex clip regions.
///
/// The clipper polygon must be convex and wound so that its interior
/// lies to the left of each directed edge (counter-clockwise in the
/// usual axes). Neither property is checked at runtime: a concave
/// clipper yields unspecified output, and a reverse-wound clipper
/// selects the complement half-planes.
#[derive(Debug, Clone, Copy)]
pub struct PolygonClipper {
    tolerance: f32,
}

impl Default for PolygonClipper {
    fn default() -> Self {
        Self { tolerance: 0.0 }
    }
}

impl PolygonClipper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widens the boundary band treated as inside. The default of
    /// zero keeps the exact `>= 0` half-plane test; a positive value
    /// helps when clip edges come from computed geometry.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Clips `subject` against `clipper` and returns the intersection
    /// polygon.
    ///
    /// Empty output is a normal outcome, not an error: an empty
    /// subject, an empty clipper, or a subject entirely outside the
    /// clip region all produce the empty polygon.
    pub fn clip(&self, subject: &Polygon, clipper: &Polygon) -> Polygon {
        Polygon::new(self.clip_points(subject.vertices(), clipper.vertices()))
    }

    /// Clips `subject` against the corner loop of an axis-aligned
    /// window.
    pub fn clip_to_window(&self, subject: &Polygon, window: &Bounds2D) -> Polygon {
        Polygon::new(self.clip_points(subject.vertices(), &window.corners()))
    }

    /// Slice-level Sutherland-Hodgman fold over the clipper's edges.
    ///
    /// When a subject edge is parallel to the current clip line (the
    /// intersection determinant is exactly zero), the subject edge's
    /// endpoint stands in for the crossing. This is a known
    /// approximation, tolerable for convex clippers, and is not
    /// silently corrected.
    pub fn clip_points(&self, subject: &[Point2D], clipper: &[Point2D]) -> Vec<Point2D> {
        if subject.is_empty() || clipper.is_empty() {
            return Vec::new();
        }

        let mut output = subject.to_vec();

        for i in 0..clipper.len() {
            if output.is_empty() {
                break;
            }

            let clip_a = clipper[i];
            let clip_b = clipper[(i + 1) % clipper.len()]; // Wraps to the first vertex

            let input = output.clone();
            output.clear();

            // `s` trails `e` around the working loop
            let mut s = *input.last().unwrap();

            for &e in &input {
                let s_inside = self.is_inside(s, clip_a, clip_b);
                let e_inside = self.is_inside(e, clip_a, clip_b);

                if e_inside {
                    if !s_inside {
                        // Edge (s, e) enters the kept half-plane
                        output.push(self.line_intersection(s, e, clip_a, clip_b));
                    }
                    output.push(e);
                } else if s_inside {
                    // Edge (s, e) leaves the kept half-plane
                    output.push(self.line_intersection(s, e, clip_a, clip_b));
                }
                // Both outside: emit nothing
                s = e;
            }
        }

        // A remainder that cannot enclose area collapses to nothing
        if output.len() < 3 {
            output.clear();
        }
        output
    }

    /// Left-of-edge test; `>= 0` counts boundary points as inside.
    #[inline]
    fn is_inside(&self, p: Point2D, clip_a: Point2D, clip_b: Point2D) -> bool {
        let cross = (clip_b.x - clip_a.x) * (p.y - clip_a.y)
            - (clip_b.y - clip_a.y) * (p.x - clip_a.x);
        cross >= -self.tolerance
    }

    /// Intersection of the line through (p1, p2) with the clip line
    /// through (a, b), both in implicit form. A zero determinant means
    /// parallel lines; `p2` is returned unchanged in that case.
    fn line_intersection(&self, p1: Point2D, p2: Point2D, a: Point2D, b: Point2D) -> Point2D {
        let a1 = p2.y - p1.y;
        let b1 = p1.x - p2.x;
        let c1 = a1 * p1.x + b1 * p1.y;

        let a2 = b.y - a.y;
        let b2 = a.x - b.x;
        let c2 = a2 * a.x + b2 * a.y;

        let det = a1 * b2 - a2 * b1;
        if det == 0.0 {
            return p2;
        }

        Point2D::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det)
    }
}

/// Clips `subject` against the convex `clipper` with the default
/// (exact) boundary test.
pub fn clip_polygon(subject: &Polygon, clipper: &Polygon) -> Polygon {
    PolygonClipper::new().clip(subject, clipper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polygon::PolygonProperties;
    use crate::utils::{comparison, constants};
    use approx::assert_abs_diff_eq;

    fn square(side: f32) -> Polygon {
        Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(side, 0.0),
            Point2D::new(side, side),
            Point2D::new(0.0, side),
        ])
    }

    #[test]
    fn test_square_clipped_by_triangle() {
        let subject = square(4.0);
        let clipper = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(0.0, 4.0),
        ]);

        let result = clip_polygon(&subject, &clipper);

        // The intersection is the triangle itself
        assert!(result.len() >= 3);
        assert_abs_diff_eq!(result.area(), 8.0, epsilon = constants::EPSILON_COARSE);

        // Every output vertex lies on or inside the triangle's half-planes
        for &vertex in &result {
            assert!(vertex.x >= -constants::EPSILON);
            assert!(vertex.y >= -constants::EPSILON);
            assert!(vertex.x + vertex.y <= 4.0 + constants::EPSILON);
        }
    }

    #[test]
    fn test_subject_inside_clipper_is_unchanged() {
        let subject = Polygon::new(vec![
            Point2D::new(1.0, 1.0),
            Point2D::new(3.0, 1.0),
            Point2D::new(2.0, 3.0),
        ]);
        let clipper = square(4.0);

        let result = clip_polygon(&subject, &clipper);
        assert_eq!(result.len(), subject.len());
        for (got, expected) in result.vertices().iter().zip(subject.vertices()) {
            assert_abs_diff_eq!(got.x, expected.x, epsilon = constants::EPSILON);
            assert_abs_diff_eq!(got.y, expected.y, epsilon = constants::EPSILON);
        }
    }

    #[test]
    fn test_clipper_inside_subject_returns_clipper_region() {
        let subject = square(10.0);
        let clipper = Polygon::new(vec![
            Point2D::new(2.0, 2.0),
            Point2D::new(5.0, 2.0),
            Point2D::new(5.0, 5.0),
            Point2D::new(2.0, 5.0),
        ]);

        let result = clip_polygon(&subject, &clipper);
        assert_abs_diff_eq!(result.area(), clipper.area(), epsilon = constants::EPSILON_COARSE);

        let bounds = result.bounds().unwrap();
        assert_abs_diff_eq!(bounds.min.x, 2.0, epsilon = constants::EPSILON);
        assert_abs_diff_eq!(bounds.max.y, 5.0, epsilon = constants::EPSILON);
    }

    #[test]
    fn test_disjoint_returns_empty() {
        let subject = square(2.0);
        let clipper = Polygon::new(vec![
            Point2D::new(10.0, 10.0),
            Point2D::new(12.0, 10.0),
            Point2D::new(12.0, 12.0),
            Point2D::new(10.0, 12.0),
        ]);

        assert!(clip_polygon(&subject, &clipper).is_empty());
    }

    #[test]
    fn test_empty_inputs_yield_empty_output() {
        let subject = square(2.0);
        assert!(clip_polygon(&Polygon::empty(), &subject).is_empty());
        assert!(clip_polygon(&subject, &Polygon::empty()).is_empty());
        assert!(clip_polygon(&Polygon::empty(), &Polygon::empty()).is_empty());
    }

    #[test]
    fn test_own_bounding_box_keeps_subject() {
        let subject = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 1.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(-1.0, 2.0),
        ]);
        let window = subject.bounds().unwrap();

        let result = PolygonClipper::new().clip_to_window(&subject, &window);
        assert!(comparison::nearly_equal_eps(
            result.area(),
            subject.area(),
            constants::EPSILON_COARSE
        ));
    }

    #[test]
    fn test_nonconvex_subject_against_window() {
        // L-shape, area 12
        let subject = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(2.0, 4.0),
            Point2D::new(0.0, 4.0),
        ]);
        let window = Bounds2D::from_extents(0.0, 0.0, 4.0, 1.0).unwrap();

        let result = PolygonClipper::new().clip_to_window(&subject, &window);
        assert_abs_diff_eq!(result.area(), 4.0, epsilon = constants::EPSILON_COARSE);
    }

    #[test]
    fn test_reverse_wound_clipper_selects_complement() {
        // With the interior to the right of every edge, a subject
        // inside the square is outside every kept half-plane
        let subject = Polygon::new(vec![
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 1.0),
            Point2D::new(1.5, 2.0),
        ]);
        let clipper = square(4.0).reversed();

        assert!(clip_polygon(&subject, &clipper).is_empty());
    }

    #[test]
    fn test_degenerate_remainder_collapses_to_empty() {
        // Subject touches the clip region along a single edge line
        let subject = Polygon::new(vec![
            Point2D::new(-2.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(0.0, -3.0),
        ]);
        let clipper = square(4.0);

        let result = clip_polygon(&subject, &clipper);
        assert!(result.is_empty() || result.area() < constants::EPSILON);
    }

    #[test]
    fn test_tolerance_keeps_near_boundary_points() {
        let clipper = square(4.0);
        let subject = Polygon::new(vec![
            Point2D::new(0.0, -1e-4),
            Point2D::new(4.0, -1e-4),
            Point2D::new(4.0, 2.0),
            Point2D::new(0.0, 2.0),
        ]);

        let strict = PolygonClipper::new().clip(&subject, &clipper);
        let loose = PolygonClipper::new().with_tolerance(1e-2).clip(&subject, &clipper);
        assert!(loose.area() >= strict.area());
        assert_eq!(loose.len(), subject.len());
    }

    #[test]
    fn test_line_intersection_crossing() {
        let clipper = PolygonClipper::new();
        let hit = clipper.line_intersection(
            Point2D::new(0.0, -1.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(-5.0, 0.0),
            Point2D::new(5.0, 0.0),
        );
        assert_abs_diff_eq!(hit.x, 0.0, epsilon = constants::EPSILON);
        assert_abs_diff_eq!(hit.y, 0.0, epsilon = constants::EPSILON);
    }

    #[test]
    fn test_line_intersection_parallel_falls_back_to_endpoint() {
        let clipper = PolygonClipper::new();
        let p2 = Point2D::new(3.0, 1.0);
        let hit = clipper.line_intersection(
            Point2D::new(0.0, 1.0),
            p2,
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
        );
        assert_eq!(hit, p2);
    }
}
