use std::path::Path;

use super::common::{parse_color, parse_f64, parse_triple, read_to_string, tokenize_lines};
use crate::error::SceneError;
use crate::raytracer::basics::Albedo;
use crate::raytracer::material::Material;
use crate::raytracer::scene::{MaterialId, Scene};

/// Parse an MTL file, adding each `newmtl` block it defines to `scene`.
/// Recognizes `newmtl`, `Ka`, `Kd`, `Ks`, `Ke`, `Ns`, `Ni`, and the
/// non-standard `al` (3-component albedo) — exactly the set
/// `original_source/raytracer-reader/scene.h::ReadMaterials` recognizes.
pub fn load(path: &Path, scene: &mut Scene) -> Result<(), SceneError> {
    let text = read_to_string(path)?;
    let mut current: Option<MaterialId> = None;

    for line in tokenize_lines(&text) {
        let current_id = |current: Option<MaterialId>, line_no: usize| -> Result<MaterialId, SceneError> {
            current.ok_or_else(|| SceneError::Malformed {
                path: path.to_path_buf(),
                line: line_no,
                what: "material property given before any 'newmtl'".to_string(),
            })
        };

        match line.tokens[0] {
            "newmtl" => {
                let name = *line.tokens.get(1).ok_or_else(|| SceneError::Malformed {
                    path: path.to_path_buf(),
                    line: line.number,
                    what: "'newmtl' missing a name".to_string(),
                })?;
                current = Some(scene.add_material(Material::new(name)));
            }
            "Ka" => {
                let color = parse_color(path, &line)?;
                let id = current_id(current, line.number)?;
                scene.material_mut(id).ambient_color = color;
            }
            "Kd" => {
                let color = parse_color(path, &line)?;
                let id = current_id(current, line.number)?;
                scene.material_mut(id).diffuse_color = color;
            }
            "Ks" => {
                let color = parse_color(path, &line)?;
                let id = current_id(current, line.number)?;
                scene.material_mut(id).specular_color = color;
            }
            "Ke" => {
                let color = parse_color(path, &line)?;
                let id = current_id(current, line.number)?;
                scene.material_mut(id).emissive = color;
            }
            "Ns" => {
                let value = parse_f64(path, line.number, line.tokens[1])?;
                let id = current_id(current, line.number)?;
                scene.material_mut(id).specular_exponent = value;
            }
            "Ni" => {
                let value = parse_f64(path, line.number, line.tokens[1])?;
                let id = current_id(current, line.number)?;
                scene.material_mut(id).refraction_index = value;
            }
            "al" => {
                let [d, r, t] = parse_triple(path, &line)?;
                let id = current_id(current, line.number)?;
                scene.material_mut(id).albedo = Albedo::new(d, r, t);
            }
            _ => {}
        }
    }

    Ok(())
}
