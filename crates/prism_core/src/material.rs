//! Surface shading coefficients.

use glam::Vec3;
use serde::Deserialize;

/// Color type alias (linear RGB, nominally 0-1, unclamped while shading)
pub type Color = Vec3;

/// Procedural pattern overriding a material's base color.
///
/// The discriminants match the integer "special" tags used by older scene
/// descriptions (0 = none, 2 = checkerboard). Scene files may give either
/// the name (`"checkerboard"`) or the integer tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "PatternRepr")]
pub enum Pattern {
    #[default]
    None = 0,
    /// Black/white tiles keyed on `floor(x) + floor(z)` in world space.
    Checkerboard = 2,
}

impl Pattern {
    /// Map a legacy integer tag to a pattern. Unknown tags mean no pattern.
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            2 => Pattern::Checkerboard,
            _ => Pattern::None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum PatternName {
    None,
    Checkerboard,
}

/// On-disk form of a pattern: a name or a legacy tag.
#[derive(Deserialize)]
#[serde(untagged)]
enum PatternRepr {
    Tag(i32),
    Name(PatternName),
}

impl From<PatternRepr> for Pattern {
    fn from(repr: PatternRepr) -> Self {
        match repr {
            PatternRepr::Tag(tag) => Pattern::from_tag(tag),
            PatternRepr::Name(PatternName::None) => Pattern::None,
            PatternRepr::Name(PatternName::Checkerboard) => Pattern::Checkerboard,
        }
    }
}

/// Classic Whitted-style material.
///
/// `reflection` is a weight in [0, 1]; `refraction` is an index of refraction
/// where 0 means opaque. Values outside those ranges are not meaningful to
/// the shading formulas.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base color (RGB, 0-1)
    pub color: Color,

    /// Ambient coefficient
    pub ambient: f32,

    /// Diffuse coefficient
    pub diffuse: f32,

    /// Specular coefficient, only active in (0, 1]
    pub specular: f32,

    /// Reflection weight, 0 = no reflective contribution
    pub reflection: f32,

    /// Index of refraction, 0 = opaque
    pub refraction: f32,

    /// Procedural color override
    pub pattern: Pattern,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::splat(0.5), // Grey default
            ambient: 1.0,
            diffuse: 1.0,
            specular: 0.0,
            reflection: 0.0,
            refraction: 0.0,
            pattern: Pattern::None,
        }
    }
}

impl Material {
    /// Create a plain diffuse material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = specular;
        self
    }

    /// Set the reflection weight, clamped to [0, 1].
    pub fn with_reflection(mut self, reflection: f32) -> Self {
        self.reflection = reflection.clamp(0.0, 1.0);
        self
    }

    /// Set the index of refraction, clamped to [0, inf).
    pub fn with_refraction(mut self, ior: f32) -> Self {
        self.refraction = ior.max(0.0);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Specular highlights only apply for coefficients in (0, 1].
    pub fn specular_active(&self) -> bool {
        self.specular > 0.0 && self.specular <= 1.0
    }

    /// Reflective but opaque: the pure mirror path.
    pub fn is_mirror(&self) -> bool {
        self.reflection > 0.0 && self.refraction == 0.0
    }

    /// Reflective and transmissive: the Fresnel-weighted glass path.
    pub fn is_dielectric(&self) -> bool {
        self.reflection > 0.0 && self.refraction > 0.0
    }
}
