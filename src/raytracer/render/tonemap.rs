//! Global Reinhard tone mapping + gamma 2.2 (spec.md §4.11), applied once
//! over the whole radiance buffer so the result never depends on the order
//! pixels were shaded in.

use crate::raytracer::basics::Color;
use crate::raytracer::image::Image;

const GAMMA: f64 = 2.2;

fn tonemap_channel(c: f64, max: f64) -> f64 {
    let reinhard = c * (1. + c / (max * max)) / (1. + c);
    reinhard.powf(1. / GAMMA)
}

pub fn apply(radiance: &[Color], width: u32, height: u32) -> Image {
    let max = radiance
        .iter()
        .flat_map(|c| c.channels())
        .fold(0.0_f64, f64::max);

    let mut image = Image::new(width, height);
    for idx in 0..radiance.len() {
        let i = (idx as u32) % width;
        let j = (idx as u32) / width;
        let [r, g, b] = radiance[idx].channels();
        let rgb = if max <= 0. {
            [0, 0, 0]
        } else {
            [
                (255. * tonemap_channel(r, max)).round() as u8,
                (255. * tonemap_channel(g, max)).round() as u8,
                (255. * tonemap_channel(b, max)).round() as u8,
            ]
        };
        image.set_pixel(j, i, rgb);
    }
    image
}
