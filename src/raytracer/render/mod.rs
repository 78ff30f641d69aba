//! The three renderers spec.md §4.8–§4.11 describes, plus the shared
//! nearest-hit/occlusion scan they're all built on.

mod hit;

pub mod depth;
pub mod full;
pub mod normal;
pub mod tonemap;

use indicatif::{ProgressState, ProgressStyle};
use std::fmt::Write;

use super::camera::Camera;
use super::scene::Scene;

/// Which of the three renderers to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Depth,
    Normal,
    /// Full Whitted shading, recursing `max_depth` bounces deep.
    Full { max_depth: u32 },
}

pub fn render(scene: &Scene, camera: &Camera, mode: RenderMode) -> super::image::Image {
    match mode {
        RenderMode::Depth => depth::render(scene, camera),
        RenderMode::Normal => normal::render(scene, camera),
        RenderMode::Full { max_depth } => full::render(scene, camera, max_depth),
    }
}

fn progress_bar_style() -> ProgressStyle {
    let text = [
        "[{bar:48.cyan/blue}] {percent}% {spinner:.green}",
        "Elapsed Time     : {elapsed_precise}",
        "ETA              : {eta}",
        "Tracing Progress : {pos}/{len} rays",
        "Tracing Speed    : {per_sec}",
    ]
    .join("\n");

    ProgressStyle::with_template(&text)
        .unwrap()
        .with_key("per_sec", |state: &ProgressState, w: &mut dyn Write| {
            _ = write!(w, "{:.0} rays/sec", state.per_sec());
        })
        .progress_chars("#>-")
}
