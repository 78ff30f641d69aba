use super::basics::{Color, Position};

/// A point light: position plus an RGB intensity multiplier. No falloff,
/// no area — a hard point source, per the Non-goals in spec.md §1.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Position,
    pub intensity: Color,
}

impl Light {
    pub fn new(position: Position, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
