// src/visualization/mod.rs
pub mod svg;

pub use svg::{render_polygon_scene, render_segment_scene, write_svg};
