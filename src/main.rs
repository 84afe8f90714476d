// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use clip2d::algorithms::{clip_polygon, clip_segments};
use clip2d::io::{load_polygon, load_segment_scene};
use clip2d::visualization::{render_polygon_scene, render_segment_scene, write_svg};

#[derive(Parser)]
#[command(name = "clip2d")]
#[command(about = "Clip segments and polygons against convex windows")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Clip a segment scene file against its window
    Segments {
        /// Scene file: count, x1 y1 x2 y2 per segment, then xmin ymin xmax ymax
        #[arg(long)]
        input: String,
        /// Output SVG path
        #[arg(long)]
        out: String,
        /// Print the clipped segments as JSON to stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Clip a subject polygon against a convex clipper polygon
    Polygon {
        /// Subject polygon file: count, then x y per vertex
        #[arg(long)]
        subject: String,
        /// Convex clipper polygon file, interior left of each directed edge
        #[arg(long)]
        clipper: String,
        /// Output SVG path
        #[arg(long)]
        out: String,
        /// Print the clipped polygon as JSON to stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Segments { input, out, json } => run_segments(&input, &out, json),
        Action::Polygon {
            subject,
            clipper,
            out,
            json,
        } => run_polygon(&subject, &clipper, &out, json),
    }
}

fn run_segments(input: &str, out: &str, json: bool) -> Result<()> {
    let scene = load_segment_scene(input).with_context(|| format!("reading {input}"))?;
    info!(
        "{} segments against window {}",
        scene.segments.len(),
        scene.window
    );

    let clipped = clip_segments(&scene.segments, &scene.window);
    info!("{} segments intersect the window", clipped.len());

    write_svg(out, &render_segment_scene(&scene, &clipped))
        .with_context(|| format!("writing {out}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&clipped)?);
    }
    Ok(())
}

fn run_polygon(subject: &str, clipper: &str, out: &str, json: bool) -> Result<()> {
    let subject = load_polygon(subject).with_context(|| format!("reading {subject}"))?;
    let clipper = load_polygon(clipper).with_context(|| format!("reading {clipper}"))?;
    info!("subject {subject}, clipper {clipper}");

    let result = clip_polygon(&subject, &clipper);
    info!("clipped result: {result}");

    write_svg(out, &render_polygon_scene(&subject, &clipper, &result))
        .with_context(|| format!("writing {out}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
