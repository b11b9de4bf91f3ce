//! Prism Core - scene authoring data for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Surface description**: `Material`, `Pattern`, `Color`
//! - **Emitters**: `Light`, `LightKind`
//! - **Geometry data**: `Mesh`, with OBJ loading
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{Material, Mesh};
//!
//! let mesh = Mesh::load_obj("teapot.obj")?;
//! println!("Loaded {} triangles", mesh.triangle_count());
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod mesh;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use light::{Light, LightKind};
pub use material::{Color, Material, Pattern};
pub use mesh::Mesh;
