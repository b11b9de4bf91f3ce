use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not normalized on construction. Code that needs a unit
/// direction (reflection, Fresnel terms) normalizes it at the point of use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same ray with its origin pushed `bias` along the (normalized) direction.
    ///
    /// Secondary rays leaving a surface use this so they do not immediately
    /// re-hit the surface they start on.
    pub fn offset(&self, bias: f32) -> Self {
        Self {
            origin: self.origin + self.direction.normalize_or_zero() * bias,
            direction: self.direction,
        }
    }

    /// True if the direction has no usable length (zero or non-finite).
    pub fn is_degenerate(&self) -> bool {
        let len_sq = self.direction.length_squared();
        !(len_sq.is_finite() && len_sq > 0.0)
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_offset_uses_unit_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
        let moved = ray.offset(0.5);

        assert_eq!(moved.origin, Vec3::new(0.0, 0.0, 0.5));
        // Direction is left untouched
        assert_eq!(moved.direction, ray.direction);
    }

    #[test]
    fn test_degenerate_direction() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_degenerate());
        assert!(Ray::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)).is_degenerate());
        assert!(!Ray::default().is_degenerate());
    }
}
