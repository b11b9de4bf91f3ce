//! The built-in demo scene.

use prism_core::{Color, Light, Material, Mesh, Pattern};
use prism_math::Vec3;
use prism_renderer::{Camera, Primitive, Scene};

/// Where a loaded model is placed, and the size of its longest side.
const MESH_CENTER: Vec3 = Vec3::new(1.8, -0.4, 4.5);
const MESH_SIZE: f32 = 1.2;

/// Checkerboard floor, five spheres, a glass ball and a disk under one
/// white point light.
pub fn build_scene() -> Scene {
    let floor = Material::new(Color::ONE).with_pattern(Pattern::Checkerboard);
    let maroon = Material::new(Color::new(0.5, 0.25, 0.25)).with_specular(0.3);
    let green = Material::new(Color::new(0.3, 0.75, 0.35)).with_specular(0.5);
    let blue = Material::new(Color::new(0.1, 0.2, 0.8)).with_specular(0.4);
    let silver = Material::new(Color::splat(0.75))
        .with_specular(1.0)
        .with_reflection(1.0);
    let orange = Material::new(Color::new(0.95, 0.5, 0.1)).with_specular(0.2);
    let glass = Material::new(Color::ONE)
        .with_ambient(0.0)
        .with_diffuse(0.0)
        .with_specular(0.8)
        .with_reflection(0.5)
        .with_refraction(1.5);
    let gold = Material::new(Color::new(0.85, 0.65, 0.2)).with_specular(0.6);

    let maroon_center = Vec3::new(1.0, -0.5, 2.5);

    Scene::new()
        .with(Primitive::sphere(maroon_center, 0.5, maroon))
        .with(Primitive::sphere(Vec3::new(-1.5, -0.5, 4.0), 0.5, green))
        .with(Primitive::sphere(maroon_center + Vec3::new(-2.0, 0.0, -2.0), 0.2, blue))
        .with(Primitive::sphere(maroon_center + Vec3::new(-0.8, 0.4, -0.67), 0.2, silver))
        .with(Primitive::sphere(Vec3::new(-3.5, -0.6, 2.9), 0.4, orange))
        .with(Primitive::sphere(Vec3::new(0.4, -0.65, 1.2), 0.35, glass))
        .with(Primitive::disk(Vec3::new(-0.4, -0.99, 3.4), Vec3::Y, 0.6, gold))
        .with(Primitive::plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, floor))
        .with_light(Light::point(Vec3::new(-2.5, 1.0, 0.6), Color::ONE))
}

/// The demo camera, high and behind the scene looking down into it.
pub fn camera() -> Camera {
    Camera::new(Vec3::new(0.0, 3.0, -3.0), Vec3::new(0.0, -1.0, 6.0))
}

/// Fit `mesh` into the free spot of the demo scene and wrap it as a
/// primitive.
pub fn mesh_primitive(mut mesh: Mesh) -> Primitive {
    mesh.fit_to(MESH_CENTER, MESH_SIZE);
    mesh.ensure_normals();
    let material = Material::new(Color::new(0.7, 0.7, 0.75)).with_specular(0.5);
    Primitive::mesh(&mesh, material)
}
