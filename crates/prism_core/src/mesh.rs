//! Triangle mesh data for Prism scenes.
//!
//! A mesh is an indexed triangle soup with optional per-vertex normals.
//! Loading goes through `tobj`; the renderer turns the data into a mesh
//! primitive that is tested triangle by triangle.

use std::path::Path;

use glam::Vec3;
use prism_math::Aabb;

use crate::error::{SceneError, SceneResult};

/// A mesh consisting of vertex positions, optional normals, and triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Vertex normals (optional, one per vertex when present)
    pub normals: Option<Vec<Vec3>>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box
    pub bounds: Aabb,
}

impl Mesh {
    /// Create a new mesh from positions and indices, optionally with normals.
    ///
    /// Normals are NOT computed here. Call `ensure_normals()` if you need them.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>, normals: Option<Vec<Vec3>>) -> Self {
        let bounds = Self::compute_bounds(&positions);
        Self {
            positions,
            normals,
            indices,
            bounds,
        }
    }

    /// Load the first model of an OBJ file, triangulated, with smooth normals.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                single_index: true,
                triangulate: true,
                ..Default::default()
            },
        )
        .map_err(|source| SceneError::ModelLoad {
            path: display.clone(),
            source,
        })?;

        let model = models
            .first()
            .ok_or_else(|| SceneError::EmptyModel(display.clone()))?;
        if models.len() > 1 {
            log::warn!(
                "{} contains {} models, only '{}' is used",
                display,
                models.len(),
                model.name
            );
        }

        let raw = &model.mesh;
        let positions: Vec<Vec3> = raw.positions.chunks_exact(3).map(Vec3::from_slice).collect();
        let normals = if raw.normals.is_empty() {
            None
        } else {
            Some(raw.normals.chunks_exact(3).map(Vec3::from_slice).collect())
        };

        let mut mesh = Mesh::new(positions, raw.indices.clone(), normals);
        mesh.validate()?;
        mesh.ensure_normals();

        log::info!(
            "Loaded {}: {} vertices, {} triangles",
            display,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Check index data against the vertex arrays.
    pub fn validate(&self) -> SceneResult<()> {
        if self.indices.is_empty() {
            return Err(SceneError::MalformedMesh("mesh has no triangles".into()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(SceneError::MalformedMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(&bad) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            return Err(SceneError::MalformedMesh(format!(
                "index {} out of range for {} vertices",
                bad,
                self.positions.len()
            )));
        }
        Ok(())
    }

    /// Compute axis-aligned bounding box from positions.
    fn compute_bounds(positions: &[Vec3]) -> Aabb {
        if positions.is_empty() {
            return Aabb::EMPTY;
        }

        let (min, max) = positions.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        Aabb::from_points(min, max)
    }

    /// Compute smooth vertex normals by averaging face normals.
    ///
    /// Faces are counter-clockwise (OBJ convention). Vertices touched only by
    /// degenerate faces get +Y.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        for face in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [face[0] as usize, face[1] as usize, face[2] as usize];
            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let p0 = self.positions[i0];
            let face_normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            *normal = normal.try_normalize().unwrap_or(Vec3::Y);
        }

        self.normals = Some(normals);
    }

    /// Ensure the mesh has one normal per vertex, computing them if necessary.
    pub fn ensure_normals(&mut self) {
        let should_compute = match &self.normals {
            None => true,
            Some(normals) => normals.len() != self.positions.len(),
        };

        if should_compute {
            if let Some(normals) = &self.normals {
                log::debug!(
                    "Normals array length ({}) doesn't match vertex count ({}), computing smooth normals",
                    normals.len(),
                    self.positions.len()
                );
            }
            self.compute_normals();
        }
    }

    /// Uniformly scale and move the mesh so its bounds are centered on
    /// `center` with the longest side equal to `size`.
    pub fn fit_to(&mut self, center: Vec3, size: f32) {
        let extent = self.bounds.max() - self.bounds.min();
        let longest = extent.max_element();
        if longest <= 0.0 || !longest.is_finite() {
            log::warn!("Cannot fit mesh with degenerate bounds");
            return;
        }

        let scale = size / longest;
        let old_center = self.bounds.centroid();
        for p in &mut self.positions {
            *p = (*p - old_center) * scale + center;
        }
        // Uniform scale leaves unit normals unchanged
        self.bounds = Self::compute_bounds(&self.positions);
    }

    /// Check if the mesh has normals.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex positions of every valid triangle, in index order.
    ///
    /// Triangles referencing missing vertices are skipped with a warning.
    pub fn triangle_vertices(&self) -> Vec<[Vec3; 3]> {
        self.valid_faces()
            .map(|[i0, i1, i2]| [self.positions[i0], self.positions[i1], self.positions[i2]])
            .collect()
    }

    /// Vertex normals of every valid triangle, aligned with `triangle_vertices()`.
    pub fn triangle_normals(&self) -> Option<Vec<[Vec3; 3]>> {
        let normals = self.normals.as_ref()?;
        if normals.len() != self.positions.len() {
            return None;
        }
        Some(
            self.valid_faces()
                .map(|[i0, i1, i2]| [normals[i0], normals[i1], normals[i2]])
                .collect(),
        )
    }

    fn valid_faces(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let vertex_count = self.positions.len();
        self.indices.chunks_exact(3).filter_map(move |chunk| {
            let face = [chunk[0] as usize, chunk[1] as usize, chunk[2] as usize];
            if face.iter().any(|&i| i >= vertex_count) {
                log::warn!(
                    "Invalid triangle indices: {:?}, vertex count: {}",
                    face,
                    vertex_count
                );
                return None;
            }
            Some(face)
        })
    }
}
