// src/geometry/polygon/properties.rs

use super::Polygon;
use crate::types::Point2D;
use crate::utils::comparison;

/// Derived polygon measures
pub trait PolygonProperties {
    /// Signed shoelace area: positive for counter-clockwise winding
    fn signed_area(&self) -> f32;

    /// Absolute enclosed area
    fn area(&self) -> f32;

    /// Total edge length of the closed loop
    fn perimeter(&self) -> f32;

    /// Point containment via ray casting. Points exactly on the
    /// boundary may land on either side.
    fn contains_point(&self, point: Point2D) -> bool;

    /// Traversal direction of the vertex loop
    fn orientation(&self) -> Orientation;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl PolygonProperties for Polygon {
    fn signed_area(&self) -> f32 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        area * 0.5
    }

    fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    fn perimeter(&self) -> f32 {
        if self.vertices.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    fn contains_point(&self, point: Point2D) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if comparison::nearly_zero(area) {
            Orientation::Collinear
        } else if area > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_area_of_square() {
        let polygon = square(4.0);
        assert_abs_diff_eq!(polygon.area(), 16.0, epsilon = 1e-5);
        assert_abs_diff_eq!(polygon.perimeter(), 16.0, epsilon = 1e-5);
    }

    #[test]
    fn test_signed_area_tracks_winding() {
        let ccw = square(2.0);
        assert!(ccw.signed_area() > 0.0);
        assert_eq!(ccw.orientation(), Orientation::CounterClockwise);

        let cw = ccw.reversed();
        assert_abs_diff_eq!(cw.signed_area(), -4.0, epsilon = 1e-5);
        assert_eq!(cw.orientation(), Orientation::Clockwise);
    }

    #[test]
    fn test_degenerate_loops_have_no_area() {
        let line = Polygon::new(vec![Point2D::new(0.0, 0.0), Point2D::new(3.0, 0.0)]);
        assert_eq!(line.signed_area(), 0.0);
        assert_eq!(line.orientation(), Orientation::Collinear);

        let spike = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(4.0, 0.0),
        ]);
        assert_eq!(spike.orientation(), Orientation::Collinear);
    }

    #[test]
    fn test_contains_point() {
        let polygon = square(4.0);
        assert!(polygon.contains_point(Point2D::new(2.0, 2.0)));
        assert!(polygon.contains_point(Point2D::new(0.5, 3.5)));
        assert!(!polygon.contains_point(Point2D::new(-1.0, 2.0)));
        assert!(!polygon.contains_point(Point2D::new(2.0, 4.5)));
    }

    #[test]
    fn test_contains_point_nonconvex() {
        // L-shape with the notch in the upper right
        let polygon = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(2.0, 4.0),
            Point2D::new(0.0, 4.0),
        ]);
        assert!(polygon.contains_point(Point2D::new(1.0, 3.0)));
        assert!(polygon.contains_point(Point2D::new(3.0, 1.0)));
        assert!(!polygon.contains_point(Point2D::new(3.0, 3.0)));
        assert_abs_diff_eq!(polygon.area(), 12.0, epsilon = 1e-5);
    }
}
