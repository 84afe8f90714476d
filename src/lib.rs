// src/lib.rs

//! 2D clipping of segments and polygons against convex clip regions.
//!
//! Two independent algorithmic cores share a small geometric
//! vocabulary:
//!
//! - [`algorithms::line_clipping`] clips a [`types::Segment`] against
//!   an axis-aligned [`types::Bounds2D`] window (Cohen-Sutherland).
//! - [`algorithms::clipping`] clips a [`geometry::polygon::Polygon`]
//!   against a convex clipper polygon (Sutherland-Hodgman).
//!
//! Both are pure, synchronous functions over plain values; "nothing
//! left after clipping" is an ordinary return value, never an error.
//! The [`io`] and [`visualization`] modules are the peripheral
//! collaborators: loading scenes from text files and rendering results
//! as SVG.

pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod io;
pub mod types;
pub mod utils;
pub mod visualization;

pub use error::{GeometryError, GeometryResult};
pub use types::*;

pub mod prelude {
    pub use super::{
        algorithms::{
            PolygonClipper, SegmentClipper, clip_polygon, clip_segment, clip_segments,
        },
        error::{GeometryError, GeometryResult},
        geometry::polygon::{Orientation, Polygon, PolygonProperties},
        io::{SegmentScene, load_polygon, load_segment_scene},
        types::*,
    };
}
