//! Light sources.

use glam::Vec3;
use serde::Deserialize;

use crate::Color;

/// Kind of emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    #[default]
    Point,
    /// Reserved for soft shadows. The shader currently skips these.
    Area,
}

/// A point-like emitter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    #[serde(default)]
    pub kind: LightKind,
}

fn default_intensity() -> f32 {
    1.0
}

impl Light {
    /// Create a point light with unit intensity.
    pub fn point(position: Vec3, color: Color) -> Self {
        Self {
            position,
            color,
            intensity: 1.0,
            kind: LightKind::Point,
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_kind(mut self, kind: LightKind) -> Self {
        self.kind = kind;
        self
    }

    /// Direction (unit) and distance from `point` to this light.
    ///
    /// Returns `None` when the point sits on the light, where no direction
    /// exists.
    pub fn direction_from(&self, point: Vec3) -> Option<(Vec3, f32)> {
        let to_light = self.position - point;
        let distance = to_light.length();
        if distance > 0.0 && distance.is_finite() {
            Some((to_light / distance, distance))
        } else {
            None
        }
    }
}
