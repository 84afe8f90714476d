// src/io/mod.rs

//! Loading of clip scenes from the whitespace-separated text format.
//!
//! A segment scene file holds a segment count, four coordinates per
//! segment (x1 y1 x2 y2), and a trailing clip window (xmin ymin xmax
//! ymax). A polygon file holds a vertex count and two coordinates per
//! vertex. Tokens may be separated by any whitespace, including
//! newlines.
//!
//! These are reporting-layer concerns: the clipping core never reads
//! files and never produces a [`LoadError`].

use crate::geometry::polygon::Polygon;
use crate::types::{Bounds2D, Point2D, Segment};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failures while reading geometry files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected {expected}, found end of input at token {position}")]
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },

    #[error("Malformed number {token:?} for {expected} at token {position}")]
    MalformedNumber {
        token: String,
        expected: &'static str,
        position: usize,
    },

    #[error("Malformed count {token:?} at token {position}")]
    MalformedCount { token: String, position: usize },

    #[error("Invalid clip window: min ({xmin}, {ymin}) exceeds max ({xmax}, {ymax})")]
    InvalidWindow {
        xmin: f32,
        ymin: f32,
        xmax: f32,
        ymax: f32,
    },
}

/// A batch of segments plus the window they are clipped against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentScene {
    pub segments: Vec<Segment>,
    pub window: Bounds2D,
}

/// Cursor over the whitespace-separated token stream
struct TokenReader<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> TokenReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, LoadError> {
        self.position += 1;
        self.tokens.next().ok_or(LoadError::UnexpectedEnd {
            expected,
            position: self.position,
        })
    }

    fn next_count(&mut self, expected: &'static str) -> Result<usize, LoadError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| LoadError::MalformedCount {
            token: token.to_string(),
            position: self.position,
        })
    }

    fn next_f32(&mut self, expected: &'static str) -> Result<f32, LoadError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| LoadError::MalformedNumber {
            token: token.to_string(),
            expected,
            position: self.position,
        })
    }

    fn next_point(&mut self, expected: &'static str) -> Result<Point2D, LoadError> {
        Ok(Point2D::new(self.next_f32(expected)?, self.next_f32(expected)?))
    }
}

/// Parses a segment scene from text
pub fn parse_segment_scene(input: &str) -> Result<SegmentScene, LoadError> {
    let mut reader = TokenReader::new(input);
    let count = reader.next_count("segment count")?;

    let mut segments = Vec::new();
    for _ in 0..count {
        let p1 = reader.next_point("segment endpoint")?;
        let p2 = reader.next_point("segment endpoint")?;
        segments.push(Segment::new(p1, p2));
    }

    let xmin = reader.next_f32("window xmin")?;
    let ymin = reader.next_f32("window ymin")?;
    let xmax = reader.next_f32("window xmax")?;
    let ymax = reader.next_f32("window ymax")?;
    let window = Bounds2D::from_extents(xmin, ymin, xmax, ymax).map_err(|_| {
        LoadError::InvalidWindow {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    })?;

    Ok(SegmentScene { segments, window })
}

/// Parses a polygon from text
pub fn parse_polygon(input: &str) -> Result<Polygon, LoadError> {
    let mut reader = TokenReader::new(input);
    let count = reader.next_count("vertex count")?;

    let mut vertices = Vec::new();
    for _ in 0..count {
        vertices.push(reader.next_point("vertex")?);
    }

    Ok(Polygon::new(vertices))
}

/// Reads a segment scene file
pub fn load_segment_scene<P: AsRef<Path>>(path: P) -> Result<SegmentScene, LoadError> {
    let path = path.as_ref();
    let scene = parse_segment_scene(&fs::read_to_string(path)?)?;
    debug!(
        "Loaded {} segments and window {} from {}",
        scene.segments.len(),
        scene.window,
        path.display()
    );
    Ok(scene)
}

/// Reads a polygon file
pub fn load_polygon<P: AsRef<Path>>(path: P) -> Result<Polygon, LoadError> {
    let path = path.as_ref();
    let polygon = parse_polygon(&fs::read_to_string(path)?)?;
    debug!(
        "Loaded polygon with {} vertices from {}",
        polygon.len(),
        path.display()
    );
    Ok(polygon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_scene() {
        let input = "2\n-5 0  5 0\n20 20 30 30\n0 -1 10 1\n";
        let scene = parse_segment_scene(input).unwrap();

        assert_eq!(scene.segments.len(), 2);
        assert_eq!(scene.segments[0], Segment::from_coords(-5.0, 0.0, 5.0, 0.0));
        assert_eq!(scene.window.min, Point2D::new(0.0, -1.0));
        assert_eq!(scene.window.max, Point2D::new(10.0, 1.0));
    }

    #[test]
    fn test_parse_polygon() {
        let input = "4  0 0  4 0  4 4  0 4";
        let polygon = parse_polygon(input).unwrap();
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.vertices()[2], Point2D::new(4.0, 4.0));
    }

    #[test]
    fn test_parse_empty_polygon() {
        let polygon = parse_polygon("0").unwrap();
        assert!(polygon.is_empty());
    }

    #[test]
    fn test_truncated_input() {
        let result = parse_segment_scene("1\n0 0 1");
        assert!(matches!(result, Err(LoadError::UnexpectedEnd { .. })));

        // Window missing after the segments
        let result = parse_segment_scene("1\n0 0 1 1\n0 0 10");
        assert!(matches!(
            result,
            Err(LoadError::UnexpectedEnd {
                expected: "window ymax",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(
            parse_polygon("three 0 0 1 1 2 2"),
            Err(LoadError::MalformedCount { .. })
        ));
        assert!(matches!(
            parse_polygon("2 0 0 1 oops"),
            Err(LoadError::MalformedNumber { position: 5, .. })
        ));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let result = parse_segment_scene("0 10 0 0 1");
        assert!(matches!(result, Err(LoadError::InvalidWindow { .. })));
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let result = load_polygon("definitely-missing.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
