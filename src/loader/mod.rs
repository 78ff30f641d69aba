//! Extended-OBJ/MTL scene loading. Grounded in
//! `original_source/raytracer-reader/scene.h` (`ReadScene`/`ReadMaterials`):
//! tokenization and scene assembly are the one piece spec.md §1 scopes out
//! of the core algorithmic spec, but spec.md §6 still pins down the exact
//! grammar, so this module follows the original's control flow closely
//! rather than inventing a new one.

mod common;
mod mtl;
mod obj;

use std::path::Path;

use crate::error::SceneError;
use crate::raytracer::scene::Scene;

/// Parse `path` (a Wavefront OBJ file, extended with the `S`/`P` scene
/// directives from spec.md §6) and its `mtllib`-referenced MTL companion
/// into an in-memory `Scene`.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    obj::load(path.as_ref())
}
