use super::basics::{Direction, Position};

/// A hit record: where the ray landed, the normal to shade with (oriented
/// toward the incoming ray), and how far along the ray it happened.
#[derive(Clone, Copy, Debug)]
pub struct Intersection {
    pub position: Position,
    pub normal: Direction,
    pub distance: f64,
}

impl Intersection {
    pub fn new(position: Position, normal: Direction, distance: f64) -> Self {
        Self {
            position,
            normal,
            distance,
        }
    }
}
