//! Normal visualization (spec.md §4.9): shading normal remapped into RGB.

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use super::hit::nearest_hit;
use super::progress_bar_style;
use crate::raytracer::basics::Direction;
use crate::raytracer::camera::Camera;
use crate::raytracer::image::Image;
use crate::raytracer::scene::Scene;

pub fn render(scene: &Scene, camera: &Camera) -> Image {
    let width = camera.width();
    let height = camera.height();
    let total = (width as u64) * (height as u64);

    let normals: Vec<Option<Direction>> = (0..total)
        .into_par_iter()
        .progress_with_style(progress_bar_style())
        .map(|idx| {
            let i = (idx % width as u64) as u32;
            let j = (idx / width as u64) as u32;
            let ray = camera.primary_ray(i, j);
            nearest_hit(scene, &ray).map(|hit| hit.intersection.normal)
        })
        .collect();

    let mut image = Image::new(width, height);
    for idx in 0..total {
        let i = (idx % width as u64) as u32;
        let j = (idx / width as u64) as u32;
        let rgb = match normals[idx as usize] {
            None => [0, 0, 0],
            Some(n) => {
                let v = n.as_ref();
                [
                    (255. * (0.5 * v.x + 0.5)).round() as u8,
                    (255. * (0.5 * v.y + 0.5)).round() as u8,
                    (255. * (0.5 * v.z + 0.5)).round() as u8,
                ]
            }
        };
        image.set_pixel(j, i, rgb);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::basics::Position;
    use crate::raytracer::material::Material;
    use crate::raytracer::primitive::Sphere;
    use crate::raytracer::scene::SphereObject;

    #[test]
    fn miss_is_black() {
        let scene = Scene::new();
        let camera = Camera::new(
            Position::new(0., 0., 3.),
            Position::origin(),
            std::f64::consts::FRAC_PI_2,
            4,
            4,
        );
        let image = render(&scene, &camera);
        assert_eq!(image.get_pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn sphere_front_face_normal_points_toward_camera() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::new("m"));
        scene.add_sphere(SphereObject {
            material,
            sphere: Sphere::new(Position::new(0., 0., -3.), 1.),
        });
        let camera = Camera::new(
            Position::origin(),
            Position::new(0., 0., -1.),
            std::f64::consts::FRAC_PI_2,
            16,
            16,
        );
        let image = render(&scene, &camera);
        let center = image.get_pixel(8, 8);
        // facing the camera, the normal's z component should remap above the
        // 0.5 midpoint (b channel)
        assert!(center[2] > 128);
    }
}
