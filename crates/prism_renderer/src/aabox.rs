//! Axis-aligned box primitive.

use crate::hittable::{forward, Hittable};
use prism_math::{Aabb, Interval, Ray, Vec3};

/// A solid axis-aligned box.
#[derive(Debug, Clone, PartialEq)]
pub struct AaBox {
    bounds: Aabb,
}

impl AaBox {
    /// Create a box spanning two opposite corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            bounds: Aabb::from_points(a, b),
        }
    }

    /// Create a box from its center and full size along each axis.
    pub fn centered(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

impl Hittable for AaBox {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.is_degenerate() {
            return None;
        }
        let span = self.bounds.clip(ray, Interval::FORWARD)?;
        // Entry distance from outside, exit distance when starting inside
        forward(span.min).or_else(|| forward(span.max))
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        // The face is the axis where the point sits furthest out, relative
        // to the half extent.
        let local = (point - self.bounds.centroid()) / self.bounds.half_extent();
        let abs = local.abs();
        if abs.x >= abs.y && abs.x >= abs.z {
            Vec3::new(local.x.signum(), 0.0, 0.0)
        } else if abs.y >= abs.z {
            Vec3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, local.z.signum())
        }
    }
}
