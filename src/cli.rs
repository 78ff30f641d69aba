use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which renderer to run. Mirrors `raytracer::render::RenderMode` but stays
/// a separate, `clap`-friendly type so the render module has no CLI
/// dependency.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    Depth,
    Normal,
    Full,
}

fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected \"x,y,z\", got {s:?}"));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.trim().parse::<f64>().map_err(|_| format!("not a number: {part:?}"))?;
    }
    Ok(out)
}

/// CLI surface for the ray tracer binary: a scene file in, a PNG out, a
/// camera, and a render mode.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the scene's OBJ file.
    pub scene: PathBuf,

    /// Where to write the rendered PNG.
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Vertical field of view, in radians.
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_2)]
    pub fov: f64,

    /// Camera position, as "x,y,z".
    #[arg(long, value_parser = parse_triple, default_value = "0,0,0")]
    pub look_from: [f64; 3],

    /// Point the camera looks at, as "x,y,z".
    #[arg(long, value_parser = parse_triple, default_value = "0,0,0")]
    pub look_to: [f64; 3],

    /// Recursion budget for reflection/refraction bounces.
    #[arg(long, default_value_t = 5)]
    pub depth: u32,

    #[arg(long, value_enum, default_value_t = Mode::Full)]
    pub mode: Mode,

    /// Raise logging verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_triple_rejects_wrong_arity() {
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,2,3,4").is_err());
    }

    #[test]
    fn parse_triple_accepts_spaced_values() {
        assert_eq!(parse_triple("1, 2, -3.5").unwrap(), [1., 2., -3.5]);
    }

    #[test]
    fn defaults_parse_from_scene_path_alone() {
        let cli = Cli::parse_from(["raytracer", "scene.obj"]);
        assert_eq!(cli.width, 800);
        assert_eq!(cli.depth, 5);
        assert!(matches!(cli.mode, Mode::Full));
    }
}
