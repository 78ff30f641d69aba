use super::basics::{Direction, Position};

/// Center + radius. Radius is assumed positive; the loader never produces a
/// non-positive one.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Position,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Position, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Three ordered vertices. Winding determines the geometric normal via
/// `cross(v1-v0, v2-v0)`.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub vertices: [Position; 3],
}

impl Triangle {
    pub fn new(v0: Position, v1: Position, v2: Position) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    pub fn vertex(&self, i: usize) -> Position {
        self.vertices[i]
    }
}

/// Sum type over the two primitive kinds the renderer knows how to
/// intersect. Dispatch happens once per candidate in the linear scan rather
/// than through a vtable, keeping the hot inner loop free of dynamic
/// dispatch (see the Design Notes on polymorphism over primitives).
#[derive(Clone, Copy, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

/// Per-vertex shading normal, unit length when present. `None` means "use
/// the triangle's geometric normal for this vertex" — represented as three
/// independent optional slots, not a side table, so lookups are always by
/// triangle-local index (0, 1, 2).
pub type VertexNormals = [Option<Direction>; 3];
