//! Scene primitives: a closed set of shapes, each owning its material.

use crate::aabox::AaBox;
use crate::hittable::Hittable;
use crate::plane::{Disk, Plane};
use crate::sphere::Sphere;
use crate::triangle::Triangle;
use crate::triangle_mesh::TriangleMesh;
use prism_core::{Material, Mesh};
use prism_math::{Ray, Vec3};

/// The shapes the tracer knows how to intersect.
#[derive(Debug, Clone)]
pub enum Geometry {
    Sphere(Sphere),
    Plane(Plane),
    Disk(Disk),
    Triangle(Triangle),
    Box(AaBox),
    Mesh(TriangleMesh),
}

impl Geometry {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Sphere(_) => "sphere",
            Geometry::Plane(_) => "plane",
            Geometry::Disk(_) => "disk",
            Geometry::Triangle(_) => "triangle",
            Geometry::Box(_) => "box",
            Geometry::Mesh(_) => "mesh",
        }
    }
}

impl Hittable for Geometry {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Geometry::Sphere(s) => s.intersect(ray),
            Geometry::Plane(p) => p.intersect(ray),
            Geometry::Disk(d) => d.intersect(ray),
            Geometry::Triangle(t) => t.intersect(ray),
            Geometry::Box(b) => b.intersect(ray),
            Geometry::Mesh(m) => m.intersect(ray),
        }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Geometry::Sphere(s) => s.normal_at(point),
            Geometry::Plane(p) => p.normal_at(point),
            Geometry::Disk(d) => d.normal_at(point),
            Geometry::Triangle(t) => t.normal_at(point),
            Geometry::Box(b) => b.normal_at(point),
            Geometry::Mesh(m) => m.normal_at(point),
        }
    }
}

/// A shape plus the material it is shaded with.
#[derive(Debug, Clone)]
pub struct Primitive {
    geometry: Geometry,
    material: Material,
}

impl Primitive {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }

    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self::new(Geometry::Sphere(Sphere::new(center, radius)), material)
    }

    pub fn plane(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self::new(Geometry::Plane(Plane::new(point, normal)), material)
    }

    pub fn disk(center: Vec3, normal: Vec3, radius: f32, material: Material) -> Self {
        Self::new(Geometry::Disk(Disk::new(center, normal, radius)), material)
    }

    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self::new(Geometry::Triangle(Triangle::new(v0, v1, v2)), material)
    }

    pub fn aabox(min: Vec3, max: Vec3, material: Material) -> Self {
        Self::new(Geometry::Box(AaBox::new(min, max)), material)
    }

    pub fn mesh(mesh: &Mesh, material: Material) -> Self {
        Self::new(Geometry::Mesh(TriangleMesh::from_mesh(mesh)), material)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The stored material. Shading works on a copy of this.
    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.geometry.intersect(ray)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.geometry.normal_at(point)
    }
}
