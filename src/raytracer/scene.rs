use std::collections::HashMap;

use super::light::Light;
use super::material::Material;
use super::primitive::{Sphere, Triangle, VertexNormals};

/// Stable index into a `Scene`'s material table. Objects and sphere-objects
/// hold one of these rather than a borrowed `&Material`, so the scene can be
/// built incrementally by the loader without fighting the borrow checker
/// over a self-referential structure (see Design Notes, "materials shared by
/// reference": an arena + stable index is the alternative the spec names to
/// a borrowed-reference layout, and it composes far more simply with an
/// incremental OBJ/MTL parse).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// A mesh triangle: the triangle itself, the material it's shaded with, and
/// up to three per-vertex shading normals (absent entries fall back to the
/// triangle's geometric normal at render time).
#[derive(Clone, Debug)]
pub struct Object {
    pub material: MaterialId,
    pub triangle: Triangle,
    pub normals: VertexNormals,
}

/// A sphere primitive paired with its material.
#[derive(Clone, Copy, Debug)]
pub struct SphereObject {
    pub material: MaterialId,
    pub sphere: Sphere,
}

/// The whole renderable world: triangles, spheres, point lights, and the
/// material table they reference. Immutable once loading finishes.
#[derive(Default)]
pub struct Scene {
    materials: Vec<Material>,
    material_names: HashMap<String, MaterialId>,
    pub objects: Vec<Object>,
    pub spheres: Vec<SphereObject>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn material_mut(&mut self, id: MaterialId) -> &mut Material {
        &mut self.materials[id.0]
    }

    pub fn material_id(&self, name: &str) -> Option<MaterialId> {
        self.material_names.get(name).copied()
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len());
        self.material_names.insert(material.name.clone(), id);
        self.materials.push(material);
        id
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_sphere(&mut self, sphere: SphereObject) {
        self.spheres.push(sphere);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::basics::Position;

    #[test]
    fn material_lookup_roundtrips_by_name() {
        let mut scene = Scene::new();
        let id = scene.add_material(Material::new("ivory"));
        assert_eq!(scene.material_id("ivory"), Some(id));
        assert_eq!(scene.material(id).name, "ivory");
    }

    #[test]
    fn empty_scene_has_no_primitives() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        let mut scene = Scene::new();
        let id = scene.add_material(Material::new("m"));
        scene.add_sphere(SphereObject {
            material: id,
            sphere: Sphere::new(Position::origin(), 1.),
        });
        assert!(!scene.is_empty());
    }
}
