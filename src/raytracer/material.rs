use super::basics::{Albedo, Color};

/// A named surface material. Colors and emissive intensity are unbounded
/// non-negative triples; `albedo` weights the diffuse/reflect/refract
/// contributions in `ComputeColor` independently of one another.
#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    pub ambient_color: Color,
    pub diffuse_color: Color,
    pub specular_color: Color,
    pub emissive: Color,
    pub specular_exponent: f64,
    pub refraction_index: f64,
    pub albedo: Albedo,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient_color: Color::BLACK,
            diffuse_color: Color::BLACK,
            specular_color: Color::BLACK,
            emissive: Color::BLACK,
            specular_exponent: 0.,
            refraction_index: 1.,
            albedo: Albedo::new(1., 0., 0.),
        }
    }
}
