//! Prism Renderer - recursive Whitted-style CPU ray tracing
//!
//! Nearest-hit resolution over a flat list of primitives, local illumination
//! with hard shadows, mirror reflection and Fresnel-weighted refraction,
//! rendered in parallel over contiguous pixel ranges.

mod aabox;
mod camera;
mod color;
mod config;
mod error;
mod framebuffer;
mod hittable;
pub mod intersect;
mod plane;
mod primitive;
mod renderer;
mod scene;
pub mod shading;
mod sphere;
mod triangle;
mod triangle_mesh;

pub use aabox::AaBox;
pub use camera::Camera;
pub use color::{clip, to_rgb8, BLACK, WHITE};
pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use framebuffer::Framebuffer;
pub use hittable::Hittable;
pub use intersect::{closest_hit, closest_index, Hit, MISS};
pub use plane::{Disk, Plane};
pub use primitive::{Geometry, Primitive};
pub use renderer::{partition, render, render_pixel, RenderOutput};
pub use scene::Scene;
pub use shading::{checker_color, fresnel, reflect, refract, RayStats, Shader, SHININESS};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use triangle_mesh::TriangleMesh;

/// Re-export common math types from prism_math
pub use prism_math::{Aabb, Interval, Ray, Vec3};
