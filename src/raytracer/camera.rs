use nalgebra::{Matrix3, Vector3};

use super::basics::{Direction, Position, EPSILON};
use super::ray::Ray;

/// World-up used for the look-at basis construction. Fixed per the
/// coordinate conventions in spec.md §6.
const WORLD_UP: Vector3<f64> = Vector3::new(0., 1., 0.);

/// A pinhole camera built from a look-at pair. `right`/`up`/`forward` form
/// an orthonormal basis; `half_width`/`half_height` are half the view
/// plane's extent at unit distance from the camera, so a pixel's camera-
/// space direction is simply `(x, y, -1)` scaled into that basis.
pub struct Camera {
    pub position: Position,
    forward: Direction,
    right: Direction,
    up: Direction,
    half_width: f64,
    half_height: f64,
    screen_width: u32,
    screen_height: u32,
}

impl Camera {
    pub fn new(
        look_from: Position,
        look_to: Position,
        fov: f64,
        screen_width: u32,
        screen_height: u32,
    ) -> Self {
        let forward = Direction::from_to(&look_to, &look_from);

        let candidate_right = WORLD_UP.cross(forward.as_ref());
        let right = if candidate_right.norm() < EPSILON {
            Direction::new(1., 0., 0.)
        } else {
            Direction::from(candidate_right)
        };

        let up = Direction::from(forward.as_ref().cross(right.as_ref()));

        let height = 2. * (fov / 2.).tan();
        let width = height * screen_width as f64 / screen_height as f64;

        Self {
            position: look_from,
            forward,
            right,
            up,
            half_width: width / 2.,
            half_height: height / 2.,
            screen_width,
            screen_height,
        }
    }

    pub fn width(&self) -> u32 {
        self.screen_width
    }

    pub fn height(&self) -> u32 {
        self.screen_height
    }

    /// The primary ray through pixel `(i, j)` — `i` is the column `[0,
    /// width)`, `j` the row `[0, height)`. Row 0 is the top of the image
    /// (see spec.md §9, Pixel orientation).
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let x = (2. * (i as f64 + 0.5) / self.screen_width as f64 - 1.) * self.half_width;
        let y = (2. * (-(j as f64) - 0.5) / self.screen_height as f64 + 1.) * self.half_height;

        let basis = Matrix3::from_columns(&[
            *self.right.as_ref(),
            *self.up.as_ref(),
            *self.forward.as_ref(),
        ]);
        let cam_space = Vector3::new(x, y, -1.);
        let direction = Direction::from(basis * cam_space);

        Ray::new(self.position, direction)
    }
}
