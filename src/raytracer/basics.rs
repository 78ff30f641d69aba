use approx::{relative_eq, AbsDiffEq};
use nalgebra::Vector3;

use std::ops::{Add, Div, Mul, Sub};

/// Below this length a `Direction` is considered degenerate; used by the
/// camera's basis fallback and nowhere else.
pub const EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(Vector3<f64>);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn origin() -> Self {
        Self::new(0., 0., 0.)
    }

    pub fn move_along(&self, distance: f64, direction: &Direction) -> Self {
        Self::from(self.0 + distance * direction.0)
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.0 - self.0).norm()
    }
}

impl From<Vector3<f64>> for Position {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl AsRef<Vector3<f64>> for Position {
    fn as_ref(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl Sub for Position {
    type Output = Vector3<f64>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl AbsDiffEq for Position {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        relative_eq!(self.0, other.0, epsilon = epsilon)
    }
}

/// A unit vector. Normalized on every construction path; never holds a
/// zero-length or non-unit vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction(Vector3<f64>);

impl Direction {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z).normalize())
    }

    pub fn from_to(from: &Position, to: &Position) -> Self {
        Self::from(to.0 - from.0)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    pub fn dot_vec(&self, other: &Vector3<f64>) -> f64 {
        self.0.dot(other)
    }

    pub fn cross(&self, other: &Self) -> Vector3<f64> {
        self.0.cross(&other.0)
    }

    pub fn reverse(&self) -> Self {
        Self::from(-self.0)
    }

    /// Wrap a vector as-is, skipping normalization. The sole legitimate use
    /// is the barycentric blend of per-vertex shading normals (spec.md
    /// §4.10), which the reference behavior leaves un-renormalized — every
    /// other constructor keeps the unit-length invariant.
    pub(crate) fn from_unnormalized(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl AsRef<Vector3<f64>> for Direction {
    fn as_ref(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl From<Vector3<f64>> for Direction {
    fn from(v: Vector3<f64>) -> Self {
        Self(v.normalize())
    }
}

impl AbsDiffEq for Direction {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        relative_eq!(self.0, other.0, epsilon = epsilon)
    }
}

/// Per-material weights `(diffuse, reflect, refract)`. Unlike a BRDF-style
/// albedo this is not required to sum to 1 — each term independently scales
/// its contribution in `ComputeColor`.
#[derive(Clone, Copy, Debug)]
pub struct Albedo(Vector3<f64>);

impl Default for Albedo {
    fn default() -> Self {
        Self::new(1., 0., 0.)
    }
}

impl Albedo {
    pub const fn new(diffuse: f64, reflect: f64, refract: f64) -> Self {
        Self(Vector3::new(diffuse, reflect, refract))
    }

    pub fn diffuse(&self) -> f64 {
        self.0.x
    }

    pub fn reflect(&self) -> f64 {
        self.0.y
    }

    pub fn refract(&self) -> f64 {
        self.0.z
    }
}

/// An unbounded, non-negative RGB triple. Bounded to `[0, 255]` only at the
/// tone-mapping step (full mode) or by direct normalization (depth/normal
/// modes) — never clamped on the way in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(Vector3<f64>);

impl Color {
    pub const BLACK: Color = Color(Vector3::new(0., 0., 0.));
    pub const WHITE: Color = Color(Vector3::new(1., 1., 1.));

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self(Vector3::new(r, g, b))
    }

    pub fn r(&self) -> f64 {
        self.0.x
    }

    pub fn g(&self) -> f64 {
        self.0.y
    }

    pub fn b(&self) -> f64 {
        self.0.z
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    pub fn max_channel(&self) -> f64 {
        self.0.x.max(self.0.y).max(self.0.z)
    }

    /// Component-wise product, used throughout §4.10's direct lighting.
    pub fn hadamard(&self, rhs: &Self) -> Self {
        Self(self.0.component_mul(&rhs.0))
    }
}

impl From<Vector3<f64>> for Color {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn direction_is_always_unit() {
        let d = Direction::new(3., 0., 0.);
        assert_abs_diff_eq!(d.as_ref().norm(), 1., epsilon = 1e-12);

        let d = Direction::from(Vector3::new(0., 5., 0.));
        assert_abs_diff_eq!(d.as_ref().norm(), 1., epsilon = 1e-12);
    }

    #[test]
    fn position_distance() {
        let a = Position::new(0., 0., 0.);
        let b = Position::new(3., 4., 0.);
        assert_abs_diff_eq!(a.distance_to(&b), 5., epsilon = 1e-12);
    }

    #[test]
    fn color_hadamard() {
        let a = Color::new(1., 2., 3.);
        let b = Color::new(2., 2., 2.);
        let c = a.hadamard(&b);
        assert_abs_diff_eq!(c.r(), 2.);
        assert_abs_diff_eq!(c.g(), 4.);
        assert_abs_diff_eq!(c.b(), 6.);
    }
}
