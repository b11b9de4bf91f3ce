//! Render configuration.

use crate::error::{RenderError, RenderResult};
use prism_core::Color;
use serde::Deserialize;

/// Every knob the tracer reads, passed down explicitly from the scheduler
/// to the shader. Immutable for the duration of a render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Scene-wide ambient light level
    pub ambient_light: f32,
    /// Deepest recursion level that is still shaded
    pub max_depth: u32,
    /// Supersampling factor S: S x S samples per pixel
    pub samples: u32,

    // Shading terms
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
    pub shadows: bool,
    pub reflections: bool,
    pub refractions: bool,

    /// Offset applied to secondary ray origins to avoid self-intersection
    pub bias: f32,
    /// Index of refraction of the medium the camera sits in
    pub ambient_ior: f32,
    /// Color of rays that escape the scene
    pub background: Color,

    /// Worker count (defaults to the number of hardware threads)
    pub threads: Option<usize>,
    /// Randomize sample positions inside each sub-pixel cell
    pub jitter: bool,
    /// Seed mixed into the per-pixel jitter generator
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: 60.0,
            ambient_light: 0.2,
            max_depth: 5,
            samples: 1,
            ambient: true,
            diffuse: true,
            specular: true,
            shadows: true,
            reflections: true,
            refractions: true,
            bias: 1e-3,
            ambient_ior: 1.0,
            background: Color::ZERO,
            threads: None,
            jitter: false,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples = samples;
        self.max_depth = max_depth;
        self
    }

    /// Turn every shading term off. Tests and debug renders switch single
    /// terms back on from here.
    pub fn unlit(mut self) -> Self {
        self.ambient = false;
        self.diffuse = false;
        self.specular = false;
        self.shadows = false;
        self.reflections = false;
        self.refractions = false;
        self
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Samples taken for each pixel (S x S).
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples * self.samples
    }

    /// Reject configurations the renderer cannot work with.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size {}x{} has no pixels",
                self.width, self.height
            )));
        }
        if self.samples == 0 {
            return Err(RenderError::InvalidConfig(
                "supersampling factor must be at least 1".into(),
            ));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(RenderError::InvalidConfig(format!(
                "field of view {} is outside (0, 180)",
                self.fov
            )));
        }
        if !(self.ambient_ior > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "ambient index of refraction {} must be positive",
                self.ambient_ior
            )));
        }
        if !(self.bias >= 0.0 && self.bias.is_finite()) {
            return Err(RenderError::InvalidConfig(format!(
                "bias {} must be a finite non-negative number",
                self.bias
            )));
        }
        if self.threads == Some(0) {
            return Err(RenderError::InvalidConfig("thread count must be at least 1".into()));
        }
        Ok(())
    }
}
