//! The full Whitted renderer (spec.md §4.10): recursive reflection and
//! refraction on top of direct Phong lighting, ported from
//! `original_source/raytracer/raytracer.h`'s `ComputeColor` /
//! `ComputeLightedColor` / `FindIntersection` / `IsVisible`.

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use super::hit::{any_occluder, nearest_hit, SceneHit};
use super::progress_bar_style;
use super::tonemap;
use crate::raytracer::basics::Color;
use crate::raytracer::camera::Camera;
use crate::raytracer::geometry::{reflect, refract};
use crate::raytracer::image::Image;
use crate::raytracer::intersection::Intersection;
use crate::raytracer::material::Material;
use crate::raytracer::ray::Ray;
use crate::raytracer::scene::Scene;

/// Offset applied to a refraction ray's origin so it doesn't immediately
/// re-intersect the surface it just left. Only refraction gets this bias —
/// see DESIGN.md's resolution of the open question in spec.md §9.
const REFRACTION_BIAS: f64 = 1e-4;

/// Sum of diffuse and Phong-specular contributions from every unoccluded
/// light, unweighted by the material's albedo (the caller applies
/// `albedo[0]`).
fn direct_lighting(scene: &Scene, material: &Material, ray: &Ray, hit: &Intersection) -> Color {
    let mut total = Color::BLACK;
    let view = ray.direction.reverse();

    for light in &scene.lights {
        let to_light = light.position - hit.position;
        let distance = to_light.norm();
        if distance <= 0. {
            continue;
        }
        let vl = crate::raytracer::basics::Direction::from(to_light);

        let shadow_ray = Ray::new(hit.position, vl);
        if any_occluder(scene, &shadow_ray, distance) {
            continue;
        }

        let n_dot_vl = hit.normal.dot(&vl);
        total = total + material.diffuse_color.hadamard(&light.intensity) * n_dot_vl.max(0.);

        let reflected = 2. * n_dot_vl * (*hit.normal.as_ref()) - *vl.as_ref();
        let spec_term = view.dot_vec(&reflected).max(0.).powf(material.specular_exponent);
        total = total + material.specular_color.hadamard(&light.intensity) * spec_term;
    }

    total
}

/// Recursive shading at a single hit point. `inside` tracks whether the ray
/// currently traveling is inside a refractive solid, flipping on every
/// refraction bounce so the relative index and the energy-split convention
/// (spec.md §4.10, final bullet) invert consistently.
fn compute_color(
    scene: &Scene,
    material_id: crate::raytracer::scene::MaterialId,
    ray: &Ray,
    hit: &Intersection,
    depth: u32,
    inside: bool,
) -> Color {
    if depth < 1 {
        return Color::BLACK;
    }

    let material = scene.material(material_id);
    let mut color = material.ambient_color + material.emissive;
    color = color + direct_lighting(scene, material, ray, hit) * material.albedo.diffuse();

    if material.albedo.reflect() > 0. && depth > 1 && !inside {
        let reflected_dir = reflect(&ray.direction, &hit.normal);
        let reflected_ray = Ray::new(hit.position, reflected_dir);
        if let Some(SceneHit {
            intersection,
            material: hit_material,
        }) = nearest_hit(scene, &reflected_ray)
        {
            let contribution =
                compute_color(scene, hit_material, &reflected_ray, &intersection, depth - 1, inside);
            color = color + contribution * material.albedo.reflect();
        }
    }

    if material.albedo.refract() > 0. && depth > 1 {
        let eta = if inside {
            material.refraction_index
        } else {
            1. / material.refraction_index
        };
        if let Some(refracted_dir) = refract(&ray.direction, &hit.normal, eta) {
            let bias = if inside { REFRACTION_BIAS } else { -REFRACTION_BIAS };
            let origin = hit.position.move_along(bias, &hit.normal);
            let refracted_ray = Ray::new(origin, refracted_dir);
            if let Some(SceneHit {
                intersection,
                material: hit_material,
            }) = nearest_hit(scene, &refracted_ray)
            {
                let contribution = compute_color(
                    scene,
                    hit_material,
                    &refracted_ray,
                    &intersection,
                    depth - 1,
                    !inside,
                );
                let weight = if inside { 1. } else { material.albedo.refract() };
                color = color + contribution * weight;
            }
        }
    }

    color
}

pub fn render(scene: &Scene, camera: &Camera, max_depth: u32) -> Image {
    let width = camera.width();
    let height = camera.height();
    let total = (width as u64) * (height as u64);

    let radiance: Vec<Color> = (0..total)
        .into_par_iter()
        .progress_with_style(progress_bar_style())
        .map(|idx| {
            let i = (idx % width as u64) as u32;
            let j = (idx / width as u64) as u32;
            let ray = camera.primary_ray(i, j);
            match nearest_hit(scene, &ray) {
                None => Color::BLACK,
                Some(SceneHit {
                    intersection,
                    material,
                }) => compute_color(scene, material, &ray, &intersection, max_depth, false),
            }
        })
        .collect();

    tonemap::apply(&radiance, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::basics::{Albedo, Position};
    use crate::raytracer::light::Light;
    use crate::raytracer::material::Material;
    use crate::raytracer::primitive::Sphere;
    use crate::raytracer::scene::SphereObject;

    fn lit_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        let mut ivory = Material::new("ivory");
        ivory.diffuse_color = Color::new(0.4, 0.4, 0.3);
        ivory.albedo = Albedo::new(0.6, 0.3, 0.1);
        let id = scene.add_material(ivory);
        scene.add_sphere(SphereObject {
            material: id,
            sphere: Sphere::new(Position::new(0., 0., -5.), 1.),
        });
        scene.add_light(Light::new(Position::new(0., 5., 0.), Color::new(1.5, 1.5, 1.5)));
        scene
    }

    #[test]
    fn miss_renders_black() {
        let scene = Scene::new();
        let camera = Camera::new(
            Position::origin(),
            Position::new(0., 0., -1.),
            std::f64::consts::FRAC_PI_2,
            4,
            4,
        );
        let image = render(&scene, &camera, 4);
        assert_eq!(image.get_pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn lit_sphere_is_brighter_than_background() {
        let scene = lit_sphere_scene();
        let camera = Camera::new(
            Position::origin(),
            Position::new(0., 0., -1.),
            std::f64::consts::FRAC_PI_2,
            16,
            16,
        );
        let image = render(&scene, &camera, 4);
        let center = image.get_pixel(8, 8);
        let corner = image.get_pixel(0, 0);
        assert!(center[0] as u32 + center[1] as u32 + center[2] as u32 > corner[0] as u32);
    }

    #[test]
    fn shadowed_point_has_no_direct_lighting() {
        let mut scene = Scene::new();
        let ivory = Material::new("ivory");
        let floor_material = scene.add_material(ivory);
        let mut occluder = Material::new("occluder");
        occluder.diffuse_color = Color::new(0.5, 0.5, 0.5);
        let occluder_id = scene.add_material(occluder);
        scene.add_sphere(SphereObject {
            material: floor_material,
            sphere: Sphere::new(Position::new(0., 0., -5.), 1.),
        });
        scene.add_sphere(SphereObject {
            material: occluder_id,
            sphere: Sphere::new(Position::new(0., 3., -5.), 1.),
        });
        scene.add_light(Light::new(Position::new(0., 10., -5.), Color::new(2., 2., 2.)));

        let ray = Ray::new(
            Position::origin(),
            crate::raytracer::basics::Direction::from(Position::new(0., 0., -5.) - Position::origin()),
        );
        let hit = crate::raytracer::geometry::intersect_sphere(
            &ray,
            &Sphere::new(Position::new(0., 0., -5.), 1.),
        )
        .unwrap();
        let lit = direct_lighting(&scene, scene.material(floor_material), &ray, &hit);
        assert_eq!(lit, Color::BLACK);
    }
}
