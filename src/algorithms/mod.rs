// src/algorithms/mod.rs

pub mod clipping;
pub mod line_clipping;

pub use self::clipping::{PolygonClipper, clip_polygon};
pub use self::line_clipping::{SegmentClipper, clip_segment, clip_segments};
