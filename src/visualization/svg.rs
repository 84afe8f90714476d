// src/visualization/svg.rs

//! SVG rendering of clip scenes.
//!
//! Produces self-contained SVG documents showing the clip window or
//! clipper polygon, the input geometry (dashed), and the clipped
//! result (emphasized; filled for polygons). The viewBox maps world
//! coordinates directly, so the images are oriented y-down like SVG
//! itself.

use crate::geometry::polygon::Polygon;
use crate::io::SegmentScene;
use crate::types::{Bounds2D, Point2D, Segment};
use log::info;
use std::io::Write;
use std::path::Path;

/// Incremental SVG document builder.
///
/// Stroke widths and dash lengths are derived from the viewBox size so
/// scenes of any scale render with comparable line weight.
struct SvgBuilder {
    content: String,
}

impl SvgBuilder {
    fn new(display_bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let viewbox_min_x = display_bounds.min.x as f64;
        let viewbox_min_y = display_bounds.min.y as f64;
        let viewbox_width = display_bounds.width() as f64;
        let viewbox_height = display_bounds.height() as f64;

        let stroke_w_normal = (viewbox_width + viewbox_height) / 2.0 * 0.006;
        let stroke_w_thin = (viewbox_width + viewbox_height) / 2.0 * 0.003;
        let dash = stroke_w_normal * 3.0;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{svg_pixel_size}" height="{svg_pixel_size}" viewBox="{viewbox_min_x} {viewbox_min_y} {viewbox_width} {viewbox_height}" xmlns="http://www.w3.org/2000/svg">
  <style>
    .background {{ fill: #f7f7f7; }}
    .clip-window {{ fill: none; stroke: #0055cc; stroke-width: {stroke_w_normal}; }}
    .clip-polygon {{ fill: none; stroke: #0055cc; stroke-width: {stroke_w_normal}; }}
    .input-segment {{ stroke: #888888; stroke-width: {stroke_w_thin}; stroke-dasharray: {dash},{dash}; }}
    .subject-polygon {{ fill: none; stroke: #888888; stroke-width: {stroke_w_thin}; stroke-dasharray: {dash},{dash}; }}
    .clipped-segment {{ stroke: #cc0000; stroke-width: {stroke_w_normal}; }}
    .clipped-polygon {{ fill: rgba(0, 170, 0, 0.2); stroke: #00aa00; stroke-width: {stroke_w_normal}; }}
  </style>
  <rect x="{viewbox_min_x}" y="{viewbox_min_y}" width="{viewbox_width}" height="{viewbox_height}" class="background" />
"#,
        );

        Self { content }
    }

    fn draw_rect(&mut self, bounds: &Bounds2D, class: &str) {
        self.content.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="{}" height="{}" class="{}" />
"#,
            bounds.min.x,
            bounds.min.y,
            bounds.width(),
            bounds.height(),
            class
        ));
    }

    fn draw_segment(&mut self, segment: &Segment, class: &str) {
        self.content.push_str(&format!(
            r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" class="{}" />
"#,
            segment.p1.x, segment.p1.y, segment.p2.x, segment.p2.y, class
        ));
    }

    fn draw_polygon(&mut self, vertices: &[Point2D], class: &str) {
        if vertices.len() < 2 {
            return;
        }
        let points_str: String = vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"  <polygon points="{}" class="{}" />
"#,
            points_str, class
        ));
    }

    fn finish(mut self) -> String {
        self.content.push_str("</svg>\n");
        self.content
    }
}

/// Viewport around everything that will be drawn, with a margin so
/// strokes at the extremes are not cut off.
fn display_bounds(drawn: Bounds2D) -> Bounds2D {
    let margin = ((drawn.width() + drawn.height()) / 2.0).max(1.0) * 0.05;
    drawn.expand(margin)
}

/// Renders a segment scene: window, dashed inputs, clipped results.
pub fn render_segment_scene(scene: &SegmentScene, clipped: &[Segment]) -> String {
    let endpoints = scene
        .segments
        .iter()
        .flat_map(|s| [s.p1, s.p2]);
    let drawn = match Bounds2D::from_points_iter(endpoints) {
        Some(bounds) => bounds.union(&scene.window),
        None => scene.window,
    };

    let mut svg = SvgBuilder::new(&display_bounds(drawn), 800.0);
    svg.draw_rect(&scene.window, "clip-window");
    for segment in &scene.segments {
        svg.draw_segment(segment, "input-segment");
    }
    for segment in clipped {
        svg.draw_segment(segment, "clipped-segment");
    }
    svg.finish()
}

/// Renders a polygon scene: clipper outline, dashed subject, filled
/// clipped result.
pub fn render_polygon_scene(subject: &Polygon, clipper: &Polygon, result: &Polygon) -> String {
    let all_vertices = subject
        .vertices()
        .iter()
        .chain(clipper.vertices())
        .chain(result.vertices())
        .copied();
    let drawn = Bounds2D::from_points_iter(all_vertices)
        .unwrap_or(Bounds2D {
            min: Point2D::new(0.0, 0.0),
            max: Point2D::new(1.0, 1.0),
        });

    let mut svg = SvgBuilder::new(&display_bounds(drawn), 800.0);
    if !clipper.is_empty() {
        svg.draw_polygon(clipper.vertices(), "clip-polygon");
    }
    if !subject.is_empty() {
        svg.draw_polygon(subject.vertices(), "subject-polygon");
    }
    if !result.is_empty() {
        svg.draw_polygon(result.vertices(), "clipped-polygon");
    }
    svg.finish()
}

/// Writes a rendered document to disk.
pub fn write_svg<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    info!("SVG '{}' written", path.display());
    Ok(())
}
