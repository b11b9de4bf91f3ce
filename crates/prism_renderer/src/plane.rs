//! Infinite plane and bounded disk primitives.

use crate::hittable::{forward, Hittable};
use prism_math::{Ray, Vec3};

/// Below this `|n·d|` a ray counts as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a plane. The normal is normalized; a zero normal yields a plane
    /// that is never hit.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Distance along `ray` to the plane, ignoring which side it is hit from.
    fn distance(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        forward((self.point - ray.origin()).dot(self.normal) / denom)
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.distance(ray)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

/// A flat disk: the part of a plane within `radius` of its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Disk {
    plane: Plane,
    radius: f32,
}

impl Disk {
    pub fn new(center: Vec3, normal: Vec3, radius: f32) -> Self {
        Self {
            plane: Plane::new(center, normal),
            radius: radius.max(0.0),
        }
    }
}

impl Hittable for Disk {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = self.plane.distance(ray)?;
        let offset = ray.at(t) - self.plane.point;
        (offset.length_squared() <= self.radius * self.radius).then_some(t)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.plane.normal_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 2.0, 0.0))
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(floor().intersect(&ray), Some(1.0));

        // Hit from below counts too
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);
        assert_eq!(floor().intersect(&ray), Some(2.0));
    }

    #[test]
    fn test_plane_parallel_and_behind() {
        let parallel = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(floor().intersect(&parallel).is_none());

        let away = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(floor().intersect(&away).is_none());
    }

    #[test]
    fn test_plane_normal_is_unit() {
        assert_eq!(floor().normal_at(Vec3::ZERO), Vec3::Y);
    }

    #[test]
    fn test_disk_hit_and_miss() {
        let disk = Disk::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 1.0);

        let center = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(disk.intersect(&center), Some(5.0));

        // Hits the supporting plane outside the radius
        let outside = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(disk.intersect(&outside).is_none());

        // Exactly on the rim counts as a hit
        let rim = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(disk.intersect(&rim), Some(5.0));
    }

    #[test]
    fn test_disk_normal() {
        let disk = Disk::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0), 1.0);
        assert_eq!(disk.normal_at(Vec3::ZERO), Vec3::new(0.0, 0.0, -1.0));
    }
}
