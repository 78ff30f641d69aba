//! Depth visualization (spec.md §4.8): grayscale by normalized hit distance.

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use super::hit::nearest_distance;
use super::progress_bar_style;
use crate::raytracer::camera::Camera;
use crate::raytracer::image::Image;
use crate::raytracer::scene::Scene;

pub fn render(scene: &Scene, camera: &Camera) -> Image {
    let width = camera.width();
    let height = camera.height();
    let total = (width as u64) * (height as u64);

    let distances: Vec<Option<f64>> = (0..total)
        .into_par_iter()
        .progress_with_style(progress_bar_style())
        .map(|idx| {
            let i = (idx % width as u64) as u32;
            let j = (idx / width as u64) as u32;
            let ray = camera.primary_ray(i, j);
            nearest_distance(scene, &ray)
        })
        .collect();

    let max = distances
        .iter()
        .filter_map(|d| *d)
        .fold(0.0_f64, f64::max);

    let mut image = Image::new(width, height);
    for idx in 0..total {
        let i = (idx % width as u64) as u32;
        let j = (idx / width as u64) as u32;
        let byte = match distances[idx as usize] {
            Some(d) if max > 0. => (255. * d / max).round() as u8,
            _ => 255,
        };
        image.set_pixel(j, i, [byte, byte, byte]);
    }
    image
}
