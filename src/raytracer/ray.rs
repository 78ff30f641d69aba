use super::basics::{Direction, Position};

/// Origin + unit direction. Immutable after construction; the constructor
/// normalizes the direction so every `Ray` in the system satisfies the
/// `‖direction‖ ≈ 1` invariant.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Position,
    pub direction: Direction,
}

impl Ray {
    pub fn new(origin: Position, direction: Direction) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Position {
        self.origin.move_along(t, &self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn at_moves_along_direction() {
        let ray = Ray::new(Position::origin(), Direction::new(1., 0., 0.));
        let p = ray.at(3.);
        assert_abs_diff_eq!(p.as_ref().x, 3., epsilon = 1e-12);
    }

    #[test]
    fn direction_is_normalized_on_construction() {
        let ray = Ray::new(Position::origin(), Direction::new(3., 4., 0.));
        assert_abs_diff_eq!(ray.direction.as_ref().norm(), 1., epsilon = 1e-12);
    }
}
