//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::hittable::{forward, Hittable};
use prism_math::{Ray, Vec3};

/// Below this determinant the ray is treated as parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, zero for degenerate triangles)
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three counter-clockwise vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self { v0, v1, v2, normal }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Face normal (unit length).
    pub fn face_normal(&self) -> Vec3 {
        self.normal
    }

    /// Möller-Trumbore test returning `(t, u, v)` for a forward hit.
    ///
    /// `u` and `v` are the barycentric weights of `v1` and `v2`.
    pub fn intersect_uv(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle (or the triangle is degenerate)
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = forward(f * edge2.dot(q))?;
        Some((t, u, v))
    }

    /// Barycentric weights `(w0, w1, w2)` of `point` projected onto the
    /// triangle's plane, plus the point's distance from that plane.
    ///
    /// Returns `None` for degenerate triangles.
    pub fn barycentric(&self, point: Vec3) -> Option<([f32; 3], f32)> {
        let e0 = self.v1 - self.v0;
        let e1 = self.v2 - self.v0;
        let p = point - self.v0;

        let d00 = e0.dot(e0);
        let d01 = e0.dot(e1);
        let d11 = e1.dot(e1);
        let d20 = p.dot(e0);
        let d21 = p.dot(e1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let w1 = (d11 * d20 - d01 * d21) / denom;
        let w2 = (d00 * d21 - d01 * d20) / denom;
        let plane_distance = p.dot(self.normal).abs();
        Some(([1.0 - w1 - w2, w1, w2], plane_distance))
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.intersect_uv(ray).map(|(t, _, _)| t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}
