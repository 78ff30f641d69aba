use std::path::Path;

use super::common::{
    parse_f64, parse_position, parse_triple, read_to_string, resolve_sibling, tokenize_lines, Line,
};
use super::mtl;
use crate::error::SceneError;
use crate::raytracer::basics::{Direction, Position};
use crate::raytracer::light::Light;
use crate::raytracer::primitive::{Sphere, Triangle};
use crate::raytracer::scene::{MaterialId, Object, Scene, SphereObject};

/// `(vertex_index, normal_index)`, both already in the raw OBJ convention
/// (1-based, or negative meaning "relative to the end of the list so far").
/// `normal_index` is `0` when absent, matching `ParseThreeIndexes`.
#[derive(Clone, Copy)]
struct FaceVertex {
    vertex: i64,
    normal: i64,
}

fn parse_face_vertex(path: &Path, line: usize, token: &str) -> Result<FaceVertex, SceneError> {
    // Accepted forms: `i`, `i/`, `i/t`, `i//n`. Only vertex and normal
    // indices are consulted — the texture slot, if present, is skipped.
    let mut parts = token.split('/');
    let vertex = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SceneError::Malformed {
            path: path.to_path_buf(),
            line,
            what: format!("empty face vertex token {token:?}"),
        })
        .and_then(|s| {
            s.parse::<i64>().map_err(|_| SceneError::BadToken {
                path: path.to_path_buf(),
                line,
                token: s.to_string(),
            })
        })?;

    let _texture = parts.next();
    let normal = match parts.next() {
        Some(n) if !n.is_empty() => n.parse::<i64>().map_err(|_| SceneError::BadToken {
            path: path.to_path_buf(),
            line,
            token: n.to_string(),
        })?,
        _ => 0,
    };

    Ok(FaceVertex { vertex, normal })
}

/// Resolve a 1-based-or-negative OBJ index against a table of length `len`.
fn resolve_index(
    path: &Path,
    line: usize,
    index: i64,
    len: usize,
) -> Result<usize, SceneError> {
    let resolved = if index < 0 {
        len as i64 + index
    } else {
        index - 1
    };
    if resolved < 0 || resolved as usize >= len {
        return Err(SceneError::IndexOutOfRange {
            path: path.to_path_buf(),
            line,
            index,
        });
    }
    Ok(resolved as usize)
}

pub fn load(path: &Path) -> Result<Scene, SceneError> {
    let text = read_to_string(path)?;
    let mut scene = Scene::new();

    let mut vertices: Vec<Position> = Vec::new();
    let mut normals: Vec<Direction> = Vec::new();
    let mut current_material: Option<MaterialId> = None;

    for line in tokenize_lines(&text) {
        match line.tokens[0] {
            "mtllib" => {
                let rel = line_arg(path, &line, 1)?;
                let mtl_path = resolve_sibling(path, rel);
                mtl::load(&mtl_path, &mut scene)?;
            }
            "usemtl" => {
                let name = line_arg(path, &line, 1)?;
                current_material = Some(scene.material_id(name).ok_or_else(|| {
                    SceneError::UnknownMaterial {
                        path: path.to_path_buf(),
                        line: line.number,
                        name: name.to_string(),
                    }
                })?);
            }
            "v" => vertices.push(parse_position(path, &line)?),
            "vn" => {
                let [x, y, z] = parse_triple(path, &line)?;
                normals.push(Direction::new(x, y, z));
            }
            "S" => {
                let material = current_material.ok_or(SceneError::NoMaterialBound {
                    path: path.to_path_buf(),
                    line: line.number,
                })?;
                let center = parse_position(path, &line)?;
                let radius = parse_f64(path, line.number, line.tokens[4])?;
                scene.add_sphere(SphereObject {
                    material,
                    sphere: Sphere::new(center, radius),
                });
            }
            "P" => {
                let position = parse_position(path, &line)?;
                let intensity_r = parse_f64(path, line.number, line.tokens[4])?;
                let intensity_g = parse_f64(path, line.number, line.tokens[5])?;
                let intensity_b = parse_f64(path, line.number, line.tokens[6])?;
                scene.add_light(Light::new(
                    position,
                    crate::raytracer::basics::Color::new(intensity_r, intensity_g, intensity_b),
                ));
            }
            "f" => {
                let material = current_material.ok_or(SceneError::NoMaterialBound {
                    path: path.to_path_buf(),
                    line: line.number,
                })?;
                add_face(path, &line, &vertices, &normals, material, &mut scene)?;
            }
            _ => {}
        }
    }

    Ok(scene)
}

fn line_arg<'a>(path: &Path, line: &Line<'a>, idx: usize) -> Result<&'a str, SceneError> {
    line.tokens.get(idx).copied().ok_or_else(|| SceneError::Malformed {
        path: path.to_path_buf(),
        line: line.number,
        what: format!("'{}' missing an argument", line.tokens[0]),
    })
}

/// Fan-triangulate a face with N ≥ 3 vertices as `(v0, vi, vi+1)` for `i` in
/// `[1, N-2]`, carrying each triangle's per-vertex normal from the OBJ
/// normal index (absent when the face vertex has no `//n` component).
fn add_face(
    path: &Path,
    line: &Line,
    vertices: &[Position],
    normals: &[Direction],
    material: MaterialId,
    scene: &mut Scene,
) -> Result<(), SceneError> {
    let face_vertices: Vec<FaceVertex> = line.tokens[1..]
        .iter()
        .map(|tok| parse_face_vertex(path, line.number, tok))
        .collect::<Result<_, _>>()?;

    if face_vertices.len() < 3 {
        return Err(SceneError::Malformed {
            path: path.to_path_buf(),
            line: line.number,
            what: "face has fewer than 3 vertices".to_string(),
        });
    }

    let resolve_vertex = |fv: FaceVertex| -> Result<Position, SceneError> {
        let idx = resolve_index(path, line.number, fv.vertex, vertices.len())?;
        Ok(vertices[idx])
    };
    let resolve_normal = |fv: FaceVertex| -> Result<Option<Direction>, SceneError> {
        if fv.normal == 0 {
            return Ok(None);
        }
        let idx = resolve_index(path, line.number, fv.normal, normals.len())?;
        Ok(Some(normals[idx]))
    };

    let v0 = resolve_vertex(face_vertices[0])?;
    let n0 = resolve_normal(face_vertices[0])?;

    for i in 1..face_vertices.len() - 1 {
        let v1 = resolve_vertex(face_vertices[i])?;
        let v2 = resolve_vertex(face_vertices[i + 1])?;
        let n1 = resolve_normal(face_vertices[i])?;
        let n2 = resolve_normal(face_vertices[i + 1])?;

        scene.add_object(Object {
            material,
            triangle: Triangle::new(v0, v1, v2),
            normals: [n0, n1, n2],
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scene_from(obj: &str, mtl: Option<&str>) -> Scene {
        let dir = tempfile::tempdir().unwrap();
        if let Some(mtl) = mtl {
            let mut f = std::fs::File::create(dir.path().join("m.mtl")).unwrap();
            f.write_all(mtl.as_bytes()).unwrap();
        }
        let obj_path = dir.path().join("s.obj");
        let mut f = std::fs::File::create(&obj_path).unwrap();
        f.write_all(obj.as_bytes()).unwrap();
        load(&obj_path).unwrap()
    }

    const MTL: &str = "newmtl white\nKd 1 1 1\n";

    #[test]
    fn fan_triangulates_a_pentagon() {
        let obj = "mtllib m.mtl\nusemtl white\n\
            v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0.5 1.5 0\nv 0 1 0\n\
            f 1 2 3 4 5\n";
        let scene = scene_from(obj, Some(MTL));
        assert_eq!(scene.objects.len(), 3);
    }

    #[test]
    fn negative_indices_resolve_relative_to_current_list() {
        let obj = "mtllib m.mtl\nusemtl white\n\
            v 0 0 0\nv 1 0 0\nv 0 1 0\n\
            f -3 -2 -1\n";
        let scene = scene_from(obj, Some(MTL));
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn face_before_usemtl_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("m.mtl")).unwrap();
        f.write_all(MTL.as_bytes()).unwrap();
        let obj_path = dir.path().join("s.obj");
        let mut f = std::fs::File::create(&obj_path).unwrap();
        f.write_all(b"mtllib m.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
            .unwrap();
        let result = load(&obj_path);
        assert!(matches!(result, Err(SceneError::NoMaterialBound { .. })));
    }

    #[test]
    fn sphere_and_light_directives() {
        let obj = "mtllib m.mtl\nusemtl white\nS 0 0 0 1\nP 1 2 3 0.5 0.5 0.5\n";
        let scene = scene_from(obj, Some(MTL));
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.lights.len(), 1);
    }
}
