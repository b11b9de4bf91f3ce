//! Hittable trait: the intersection contract every primitive shape exposes.

use prism_math::{Ray, Vec3};

/// Trait for shapes that can be hit by rays.
///
/// Shapes report distances only. Which shape is nearest, and what color it
/// produces, is decided by the intersection resolver and the shader.
pub trait Hittable: Send + Sync {
    /// Nearest strictly positive distance along `ray` at which it meets the
    /// shape, or `None` for a miss.
    ///
    /// Degenerate input (parallel rays, zero-length directions, collapsed
    /// geometry) must come back as `None` rather than a non-finite value.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at `point`.
    ///
    /// Only meaningful for points produced by a successful `intersect` on the
    /// same shape.
    fn normal_at(&self, point: Vec3) -> Vec3;
}

/// Keep a root only if it is a usable forward distance.
#[inline]
pub(crate) fn forward(t: f32) -> Option<f32> {
    (t > 0.0 && t.is_finite()).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_filters_non_hits() {
        assert_eq!(forward(2.0), Some(2.0));
        assert_eq!(forward(0.0), None);
        assert_eq!(forward(-1.0), None);
        assert_eq!(forward(f32::NAN), None);
        assert_eq!(forward(f32::INFINITY), None);
    }
}
