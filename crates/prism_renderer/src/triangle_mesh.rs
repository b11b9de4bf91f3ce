//! Triangle mesh primitive.
//!
//! Every triangle is tested against the ray (no acceleration structure); the
//! mesh bounds only reject rays that cannot hit anything. Normals are
//! recovered from the hit point, so the primitive holds no per-hit state and
//! can be shared between render workers.

use crate::hittable::Hittable;
use crate::triangle::Triangle;
use prism_core::Mesh;
use prism_math::{Aabb, Interval, Ray, Vec3};

/// Barycentric slack when deciding which triangle a point lies on.
const INSIDE_EPSILON: f32 = 1e-4;

/// A renderable triangle mesh.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
    /// Per-triangle vertex normals for smooth shading
    vertex_normals: Option<Vec<[Vec3; 3]>>,
    bounds: Aabb,
}

impl TriangleMesh {
    /// Build the primitive from loaded mesh data.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let triangles: Vec<Triangle> = mesh
            .triangle_vertices()
            .into_iter()
            .map(|[v0, v1, v2]| Triangle::new(v0, v1, v2))
            .collect();

        Self {
            triangles,
            vertex_normals: mesh.triangle_normals(),
            bounds: mesh.bounds,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Index of the triangle `point` lies on: the closest plane among the
    /// triangles whose barycentric weights contain the point.
    fn owning_triangle(&self, point: Vec3) -> Option<(usize, [f32; 3])> {
        let mut best: Option<(usize, [f32; 3], f32)> = None;

        for (i, tri) in self.triangles.iter().enumerate() {
            let Some((weights, plane_distance)) = tri.barycentric(point) else {
                continue;
            };
            let inside = weights.iter().all(|&w| w >= -INSIDE_EPSILON);
            let closer = best.map_or(true, |(_, _, d)| plane_distance < d);
            if inside && closer {
                best = Some((i, weights, plane_distance));
            }
        }

        best.map(|(i, weights, _)| (i, weights))
    }
}

impl Hittable for TriangleMesh {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        if !self.bounds.hit(ray, Interval::FORWARD) {
            return None;
        }

        self.triangles
            .iter()
            .filter_map(|tri| tri.intersect(ray))
            .min_by(f32::total_cmp)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        let Some((index, [w0, w1, w2])) = self.owning_triangle(point) else {
            log::trace!("No mesh triangle contains {:?}", point);
            return Vec3::ZERO;
        };

        match &self.vertex_normals {
            Some(normals) => {
                let [n0, n1, n2] = normals[index];
                (n0 * w0 + n1 * w1 + n2 * w2).normalize_or_zero()
            }
            None => self.triangles[index].face_normal(),
        }
    }
}
