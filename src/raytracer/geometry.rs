//! Ray-primitive intersection and the reflect/refract/barycentric helpers
//! the full renderer builds on. Ported line-for-line from the reference
//! `GetIntersection`/`Refract`/`Reflect`/`GetBarycentricCoords` functions,
//! restated as pure functions over the crate's newtypes.

use super::basics::{Direction, Position};
use super::intersection::Intersection;
use super::primitive::{Primitive, Sphere, Triangle};
use super::ray::Ray;

/// Below this, the ray is considered parallel to the triangle's plane.
const EPSILON_PARALLEL: f64 = 1e-12;

/// Single dispatch point over the two primitive kinds (spec.md §9's Design
/// Note); callers that hold a `Primitive` use this instead of matching it
/// themselves.
pub fn intersect(ray: &Ray, primitive: &Primitive) -> Option<Intersection> {
    match primitive {
        Primitive::Sphere(sphere) => intersect_sphere(ray, sphere),
        Primitive::Triangle(triangle) => intersect_triangle(ray, triangle),
    }
}

pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<Intersection> {
    let l = sphere.center - ray.origin;
    let tca = ray.direction.dot_vec(&l);
    if tca < 0. {
        return None;
    }

    let d2 = l.dot(&l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let (mut t0, mut t1) = (tca - thc, tca + thc);
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    if t0 < 0. {
        t0 = t1;
        if t0 < 0. {
            return None;
        }
    }
    Some(finish_sphere_hit(ray, sphere, t0))
}

fn finish_sphere_hit(ray: &Ray, sphere: &Sphere, t: f64) -> Intersection {
    let pos = ray.at(t);
    let mut normal = Direction::from_to(&sphere.center, &pos);
    if normal.dot(&ray.direction) > 0. {
        normal = normal.reverse();
    }
    Intersection::new(pos, normal, t)
}

/// Möller-Trumbore. The geometric normal returned here is `cross(AB, AC)`
/// flipped to face the incoming ray; it is *not* the final shading normal —
/// callers that need per-vertex interpolated normals substitute it in
/// afterward (see `render::hit::shading_normal`).
pub fn intersect_triangle(ray: &Ray, tri: &Triangle) -> Option<Intersection> {
    let v0 = tri.vertex(0);
    let v1 = tri.vertex(1);
    let v2 = tri.vertex(2);

    let ab = v1 - v0;
    let ac = v2 - v0;
    let d = ray.direction.as_ref();

    let h = d.cross(&ac);
    let a = ab.dot(&h);
    if a.abs() < EPSILON_PARALLEL {
        return None;
    }

    let f = 1. / a;
    let s = ray.origin - v0;
    let u = f * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&ab);
    let v = f * d.dot(&q);
    if v < 0. || u + v > 1. {
        return None;
    }

    let t = f * ac.dot(&q);
    if t <= EPSILON_PARALLEL {
        return None;
    }

    let pos = ray.at(t);
    let mut normal = Direction::from(ab.cross(&ac));
    if normal.dot(&ray.direction) > 0. {
        normal = normal.reverse();
    }
    let dist = pos.distance_to(&ray.origin);
    Some(Intersection::new(pos, normal, dist))
}

/// Reflect unit `d` about unit `n`, where `n` is oriented toward the
/// incoming ray (so `d · n` is negative in the usual case — hence the
/// absolute value).
pub fn reflect(d: &Direction, n: &Direction) -> Direction {
    let cos1 = d.dot(n).abs();
    Direction::from(d.as_ref() + 2. * cos1 * n.as_ref())
}

/// Refract unit `d` through the interface with normal `n` and relative
/// index `eta = eta_from / eta_to`. Returns `None` on total internal
/// reflection.
pub fn refract(d: &Direction, n: &Direction, eta: f64) -> Option<Direction> {
    let cos1 = d.dot(n).abs();
    let sin2 = eta * (1. - cos1 * cos1).sqrt();
    if sin2.abs() > 1. {
        return None;
    }
    let cos2 = (1. - sin2 * sin2).sqrt();
    Some(Direction::from(
        eta * d.as_ref() + (eta * cos1 - cos2) * n.as_ref(),
    ))
}

/// `(u, v, w)` weights for `(v0, v1, v2)` at a point assumed on the
/// triangle's plane. Degenerate (zero-area) triangles never reach this
/// function in practice — they fail the Möller-Trumbore parallel test
/// first.
pub fn barycentric(tri: &Triangle, p: &Position) -> (f64, f64, f64) {
    let v0 = tri.vertex(0);
    let v1 = tri.vertex(1);
    let v2 = tri.vertex(2);

    let ab = v1 - v0;
    let ac = v2 - v0;
    let ap = *p - v0;
    let bp = *p - v1;
    let cp = *p - v2;

    let area = ab.cross(&ac).norm();
    let u = cp.cross(&bp).norm() / area;
    let v = ap.cross(&cp).norm() / area;
    let w = ap.cross(&bp).norm() / area;
    (u, v, w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sphere_two_roots_hits_nearest() {
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., -1.));
        let sphere = Sphere::new(Position::new(0., 0., -5.), 1.);
        let hit = intersect_sphere(&ray, &sphere).unwrap();
        assert_abs_diff_eq!(hit.distance, 4., epsilon = 1e-9);
    }

    #[test]
    fn intersect_dispatches_by_primitive_kind() {
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., -1.));
        let sphere = Sphere::new(Position::new(0., 0., -5.), 1.);
        let direct = intersect_sphere(&ray, &sphere).unwrap();
        let dispatched = intersect(&ray, &Primitive::from(sphere)).unwrap();
        assert_abs_diff_eq!(dispatched.distance, direct.distance, epsilon = 1e-12);
    }

    #[test]
    fn sphere_behind_ray_misses() {
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., 1.));
        let sphere = Sphere::new(Position::new(0., 0., -5.), 1.);
        assert!(intersect_sphere(&ray, &sphere).is_none());
    }

    #[test]
    fn sphere_origin_inside_flips_normal_toward_ray() {
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., -1.));
        let sphere = Sphere::new(Position::origin(), 2.);
        let hit = intersect_sphere(&ray, &sphere).unwrap();
        assert!(hit.normal.dot(&ray.direction) <= 0.);
    }

    #[test]
    fn triangle_center_hit() {
        let tri = Triangle::new(
            Position::new(-1., -1., -5.),
            Position::new(1., -1., -5.),
            Position::new(0., 1., -5.),
        );
        let ray = Ray::new(Position::origin(), Direction::new(0., -1. / 3., -5.));
        let hit = intersect_triangle(&ray, &tri).unwrap();
        assert!(hit.normal.dot(&ray.direction) <= 0.);
    }

    #[test]
    fn triangle_interior_ray_hits() {
        let ray = Ray::new(Position::new(-10., 0., 0.), Direction::new(1., 0., 0.));
        let tri = Triangle::new(
            Position::new(0., -1., -1.),
            Position::new(0., 1., -1.),
            Position::new(0., 0., 1.),
        );
        assert!(intersect_triangle(&ray, &tri).is_some());
    }

    #[test]
    fn triangle_behind_vertex_misses() {
        let ray = Ray::new(Position::new(-10., 5., 5.), Direction::new(1., 0., 0.));
        let tri = Triangle::new(
            Position::new(0., -1., -1.),
            Position::new(0., 1., -1.),
            Position::new(0., 0., 1.),
        );
        assert!(intersect_triangle(&ray, &tri).is_none());
    }

    #[test]
    fn reflect_is_involution() {
        let d = Direction::new(1., -1., -1.);
        let n = Direction::new(0., 1., 0.);
        let r1 = reflect(&d, &n);
        let n_facing = if n.dot(&d) > 0. { n.reverse() } else { n };
        let back = reflect(&r1, &n_facing);
        assert_abs_diff_eq!(back.as_ref().x, d.as_ref().x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.as_ref().y, d.as_ref().y, epsilon = 1e-9);
        assert_abs_diff_eq!(back.as_ref().z, d.as_ref().z, epsilon = 1e-9);
    }

    #[test]
    fn refract_total_internal_reflection() {
        let d = Direction::new(1., -0.05, 0.);
        let n = Direction::new(-1., 0., 0.);
        assert!(refract(&d, &n, 2.0).is_none());
    }

    #[test]
    fn barycentric_at_vertices_is_standard_basis() {
        let tri = Triangle::new(
            Position::new(0., 0., 0.),
            Position::new(1., 0., 0.),
            Position::new(0., 1., 0.),
        );
        let (u, v, w) = barycentric(&tri, &tri.vertex(0));
        assert_abs_diff_eq!(u, 1., epsilon = 1e-9);
        assert_abs_diff_eq!(v, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(w, 0., epsilon = 1e-9);

        let (u, v, w) = barycentric(&tri, &tri.vertex(1));
        assert_abs_diff_eq!(u, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(v, 1., epsilon = 1e-9);
        assert_abs_diff_eq!(w, 0., epsilon = 1e-9);
    }
}
