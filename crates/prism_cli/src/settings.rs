//! Settings file loading and command line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prism_math::Vec3;
use prism_renderer::{Camera, RenderConfig};
use serde::Deserialize;

use crate::cli::Args;

/// Camera placement override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraSettings {
    pub position: Vec3,
    pub look_at: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

impl CameraSettings {
    pub fn to_camera(&self) -> Camera {
        Camera::new(self.position, self.look_at).with_up(self.up)
    }
}

/// Contents of a settings file: render configuration fields at the top
/// level plus an optional camera.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: Option<CameraSettings>,
}

impl Settings {
    /// Read and parse a JSON settings file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings for this run: the file if one was given, then command line
    /// flags on top.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut settings = match &args.settings {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_overrides(args);
        settings.render.validate()?;
        Ok(settings)
    }

    pub fn apply_overrides(&mut self, args: &Args) {
        let render = &mut self.render;
        if let Some(width) = args.width {
            render.width = width;
        }
        if let Some(height) = args.height {
            render.height = height;
        }
        if let Some(samples) = args.samples {
            render.samples = samples;
        }
        if let Some(max_depth) = args.max_depth {
            render.max_depth = max_depth;
        }
        if args.threads.is_some() {
            render.threads = args.threads;
        }
    }
}
