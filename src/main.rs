use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use whittle_tracer::cli::{Cli, Mode};
use whittle_tracer::loader;
use whittle_tracer::raytracer::basics::Position;
use whittle_tracer::raytracer::camera::Camera;
use whittle_tracer::raytracer::render::{self, RenderMode};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("only set once");
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scene = loader::load_scene(&cli.scene)
        .with_context(|| format!("loading scene {}", cli.scene.display()))?;
    info!(
        objects = scene.objects.len(),
        spheres = scene.spheres.len(),
        lights = scene.lights.len(),
        "scene loaded"
    );

    let [fx, fy, fz] = cli.look_from;
    let [tx, ty, tz] = cli.look_to;
    let camera = Camera::new(
        Position::new(fx, fy, fz),
        Position::new(tx, ty, tz),
        cli.fov,
        cli.width,
        cli.height,
    );

    let mode = match cli.mode {
        Mode::Depth => RenderMode::Depth,
        Mode::Normal => RenderMode::Normal,
        Mode::Full => RenderMode::Full { max_depth: cli.depth },
    };

    let started = std::time::Instant::now();
    let image = render::render(&scene, &camera, mode);
    let elapsed = started.elapsed();
    info!(mode = ?cli.mode, width = cli.width, height = cli.height, ?elapsed, "render complete");

    image
        .save(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    Ok(())
}
