use crate::raytracer::geometry::{barycentric, intersect};
use crate::raytracer::intersection::Intersection;
use crate::raytracer::primitive::Primitive;
use crate::raytracer::ray::Ray;
use crate::raytracer::scene::{MaterialId, Scene};

/// A nearest-hit result with the *shading* normal already substituted in
/// (barycentric blend of per-vertex normals for triangles, falling back to
/// the geometric normal where a vertex has none; the sphere's intersection
/// normal unchanged). See spec.md §4.10, "Shading normal".
pub struct SceneHit {
    pub intersection: Intersection,
    pub material: MaterialId,
}

/// Blend per-vertex normals by the hit point's barycentric weights,
/// substituting the triangle's geometric normal wherever a vertex has none.
/// Deliberately **not** renormalized afterward — this matches the reference
/// behavior (spec.md §4.10).
fn shading_normal(
    triangle: &crate::raytracer::primitive::Triangle,
    normals: &crate::raytracer::primitive::VertexNormals,
    geometric: &crate::raytracer::basics::Direction,
    hit_pos: &crate::raytracer::basics::Position,
) -> crate::raytracer::basics::Direction {
    use nalgebra::Vector3;

    let (u, v, w) = barycentric(triangle, hit_pos);
    let weights = [u, v, w];
    let mut blended = Vector3::new(0., 0., 0.);
    for i in 0..3 {
        let component = normals[i].as_ref().map(|n| *n.as_ref()).unwrap_or(*geometric.as_ref());
        blended += weights[i] * component;
    }
    crate::raytracer::basics::Direction::from_unnormalized(blended)
}

/// Linear scan of every triangle and sphere; keeps the closest positive-
/// distance hit. The caller gets back the shading normal, not the raw
/// geometric one.
pub fn nearest_hit(scene: &Scene, ray: &Ray) -> Option<SceneHit> {
    let mut best: Option<(Intersection, MaterialId)> = None;

    for obj in &scene.objects {
        if let Some(hit) = intersect(ray, &Primitive::from(obj.triangle)) {
            if best.as_ref().is_none_or(|(b, _)| hit.distance < b.distance) {
                let normal = shading_normal(&obj.triangle, &obj.normals, &hit.normal, &hit.position);
                let intersection = Intersection::new(hit.position, normal, hit.distance);
                best = Some((intersection, obj.material));
            }
        }
    }

    for sp in &scene.spheres {
        if let Some(hit) = intersect(ray, &Primitive::from(sp.sphere)) {
            if best.as_ref().is_none_or(|(b, _)| hit.distance < b.distance) {
                best = Some((hit, sp.material));
            }
        }
    }

    best.map(|(intersection, material)| SceneHit {
        intersection,
        material,
    })
}

/// The minimum positive hit distance over the whole scene, or `None` on a
/// miss. Used by the depth renderer, which has no use for a shading normal.
pub fn nearest_distance(scene: &Scene, ray: &Ray) -> Option<f64> {
    let mut min: Option<f64> = None;

    for obj in &scene.objects {
        if let Some(hit) = intersect(ray, &Primitive::from(obj.triangle)) {
            min = Some(min.map_or(hit.distance, |m| m.min(hit.distance)));
        }
    }
    for sp in &scene.spheres {
        if let Some(hit) = intersect(ray, &Primitive::from(sp.sphere)) {
            min = Some(min.map_or(hit.distance, |m| m.min(hit.distance)));
        }
    }

    min
}

/// True if a ray toward a light is blocked before distance `max_dist`. No
/// self-intersection bias is applied (see DESIGN.md's resolution of the
/// open question in spec.md §9).
pub fn any_occluder(scene: &Scene, ray: &Ray, max_dist: f64) -> bool {
    for obj in &scene.objects {
        if let Some(hit) = intersect(ray, &Primitive::from(obj.triangle)) {
            if hit.distance < max_dist {
                return true;
            }
        }
    }
    for sp in &scene.spheres {
        if let Some(hit) = intersect(ray, &Primitive::from(sp.sphere)) {
            if hit.distance < max_dist {
                return true;
            }
        }
    }
    false
}
