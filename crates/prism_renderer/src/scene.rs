//! Render-time scene: primitives and lights, read-only while shading.

use crate::intersect::{self, Hit};
use crate::primitive::Primitive;
use prism_core::Light;
use prism_math::Ray;

/// Ordered primitives plus ordered lights.
///
/// Primitives live in one arena and are referred to by index everywhere.
/// Order only matters for tie-breaking between equally distant hits.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive and return its index.
    pub fn add(&mut self, primitive: Primitive) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn with(mut self, primitive: Primitive) -> Self {
        self.add(primitive);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Index-aligned distances of `ray` against every primitive.
    pub fn distances(&self, ray: &Ray) -> Vec<f32> {
        intersect::distances(ray, &self.primitives)
    }

    /// Nearest primitive hit by `ray`.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        intersect::closest_hit(ray, &self.primitives)
    }
}
