//! Whitted-style recursive shading.
//!
//! A `Shader` borrows the scene and the render configuration, resolves the
//! nearest hit for a ray and evaluates, in order:
//! - Ambient term
//! - Per point light: shadow test, Lambert diffuse, Blinn-Phong specular
//! - Mirror reflection (opaque reflective materials)
//! - Fresnel-weighted refraction (transmissive materials)
//!
//! Secondary rays recurse through `trace` with `depth + 1`. Colors returned
//! by `trace` and `shade` are unclamped; only `radiance` clips.

use std::fmt;

use crate::color::{clip, BLACK, WHITE};
use crate::config::RenderConfig;
use crate::hittable::Hittable;
use crate::intersect;
use crate::scene::Scene;
use prism_core::{Color, Light, LightKind, Material, Pattern};
use prism_math::{Interval, Ray, Vec3};

/// Blinn-Phong exponent. High enough for a tight highlight.
pub const SHININESS: i32 = 120;

/// Counters collected while shading.
///
/// Each render worker owns one; the driver merges them at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayStats {
    pub camera_rays: u64,
    pub shade_calls: u64,
    pub shadow_rays: u64,
    pub reflection_rays: u64,
    pub refraction_rays: u64,
    pub total_internal_reflections: u64,
    /// Recursive calls cut off by the depth limit
    pub depth_limit_hits: u64,
    /// Lights of a kind the shader does not evaluate
    pub skipped_lights: u64,
    /// Deepest recursion level that was actually shaded
    pub max_depth: u32,
}

impl RayStats {
    pub fn merge(&mut self, other: &RayStats) {
        self.camera_rays += other.camera_rays;
        self.shade_calls += other.shade_calls;
        self.shadow_rays += other.shadow_rays;
        self.reflection_rays += other.reflection_rays;
        self.refraction_rays += other.refraction_rays;
        self.total_internal_reflections += other.total_internal_reflections;
        self.depth_limit_hits += other.depth_limit_hits;
        self.skipped_lights += other.skipped_lights;
        self.max_depth = self.max_depth.max(other.max_depth);
    }

    /// Every ray cast, primary and secondary.
    pub fn total_rays(&self) -> u64 {
        self.camera_rays + self.shadow_rays + self.reflection_rays + self.refraction_rays
    }
}

impl fmt::Display for RayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rays ({} camera, {} shadow, {} reflection, {} refraction), {} shaded, max depth {}",
            self.total_rays(),
            self.camera_rays,
            self.shadow_rays,
            self.reflection_rays,
            self.refraction_rays,
            self.shade_calls,
            self.max_depth
        )
    }
}

/// Recursive shading evaluator for one worker.
pub struct Shader<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
    stats: RayStats,
}

impl<'a> Shader<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Self {
        Self {
            scene,
            config,
            stats: RayStats::default(),
        }
    }

    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    pub fn stats(&self) -> &RayStats {
        &self.stats
    }

    pub fn into_stats(self) -> RayStats {
        self.stats
    }

    /// Color seen along a camera ray, clipped for output.
    pub fn radiance(&mut self, ray: &Ray) -> Color {
        self.stats.camera_rays += 1;
        clip(self.trace(ray, 0))
    }

    /// Nearest hit plus shading; the background color on a miss.
    pub fn trace(&mut self, ray: &Ray, depth: u32) -> Color {
        match self.scene.closest_hit(ray) {
            Some(hit) => {
                let point = ray.at(hit.distance);
                self.shade(point, ray.direction(), hit.index, depth)
            }
            None => self.config.background,
        }
    }

    /// Color leaving `point` on primitive `index` toward the viewer.
    ///
    /// Past the configured maximum depth the result is black.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a primitive of the scene.
    pub fn shade(&mut self, point: Vec3, incoming: Vec3, index: usize, depth: u32) -> Color {
        if depth > self.config.max_depth {
            self.stats.depth_limit_hits += 1;
            return BLACK;
        }
        self.stats.shade_calls += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let scene = self.scene;
        let primitive = &scene.primitives()[index];
        let material = effective_material(primitive.material(), point);
        let normal = primitive.normal_at(point);
        let incoming = incoming.normalize_or_zero();

        let mut color = BLACK;

        if self.config.ambient {
            color += material.color * self.config.ambient_light * material.ambient;
        }

        for light in scene.lights() {
            color += self.direct_light(light, &material, point, normal, incoming);
        }

        if self.config.reflections && material.is_mirror() && material.specular_active() {
            color += self.mirror(point, incoming, normal, depth);
        }

        if self.config.refractions && material.is_dielectric() {
            color += self.refraction(point, incoming, normal, &material, depth);
        }

        color
    }

    /// Diffuse and specular contribution of a single light.
    fn direct_light(
        &mut self,
        light: &Light,
        material: &Material,
        point: Vec3,
        normal: Vec3,
        incoming: Vec3,
    ) -> Color {
        if light.kind != LightKind::Point {
            self.stats.skipped_lights += 1;
            return BLACK;
        }
        let Some((to_light, distance)) = light.direction_from(point) else {
            return BLACK;
        };

        let lambert = normal.dot(to_light);
        if lambert <= 0.0 {
            return BLACK;
        }
        if self.config.shadows && self.in_shadow(point, to_light, distance) {
            return BLACK;
        }

        let mut color = BLACK;

        if self.config.diffuse {
            color += material.color * light.color * material.diffuse * light.intensity * lambert
                / distance;
        }

        if self.config.specular && material.specular_active() {
            let half = (to_light - incoming).normalize_or_zero();
            let highlight = normal.dot(half).max(0.0).powi(SHININESS);
            color += light.color * highlight * light.intensity;
        }

        color
    }

    /// True if something sits between `point` and a light `distance` away.
    ///
    /// The ray starts `bias` toward the light, so the window ends `bias`
    /// short of `distance` and stops exactly at the light.
    fn in_shadow(&mut self, point: Vec3, to_light: Vec3, distance: f32) -> bool {
        self.stats.shadow_rays += 1;
        let bias = self.config.bias;
        let ray = Ray::new(point, to_light).offset(bias);
        let window = Interval::new(0.0, distance - bias);
        intersect::any_hit_within(&ray, self.scene.primitives(), window)
    }

    /// Full-strength mirror bounce.
    fn mirror(&mut self, point: Vec3, incoming: Vec3, normal: Vec3, depth: u32) -> Color {
        self.stats.reflection_rays += 1;
        let ray = Ray::new(point, reflect(incoming, normal)).offset(self.config.bias);
        self.trace(&ray, depth + 1)
    }

    /// Transmitted share of a dielectric surface.
    ///
    /// Only the `(1 - kr)` refracted part is added; the reflected share of
    /// glass is not traced.
    fn refraction(
        &mut self,
        point: Vec3,
        incoming: Vec3,
        normal: Vec3,
        material: &Material,
        depth: u32,
    ) -> Color {
        let ambient_ior = self.config.ambient_ior;
        let kr = fresnel(incoming, normal, material.refraction, ambient_ior);
        let direction = match refract(incoming, normal, material.refraction, ambient_ior) {
            Some(direction) if kr < 1.0 => direction,
            _ => {
                self.stats.total_internal_reflections += 1;
                return BLACK;
            }
        };

        self.stats.refraction_rays += 1;
        let ray = Ray::new(point, direction).offset(self.config.bias);
        self.trace(&ray, depth + 1) * (1.0 - kr)
    }
}

/// Mirror `incident` about `normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Fresnel reflectance `kr` for unpolarized light crossing a surface between
/// a medium of `ambient_ior` and one of `ior`.
///
/// A positive `incident . normal` means the ray is leaving the material.
/// Returns 1 on total internal reflection.
pub fn fresnel(incident: Vec3, normal: Vec3, ior: f32, ambient_ior: f32) -> f32 {
    if ior <= 0.0 || ambient_ior <= 0.0 {
        return 1.0;
    }
    let cos_i = incident.dot(normal).clamp(-1.0, 1.0);
    let (eta_i, eta_t) = if cos_i > 0.0 {
        (ior, ambient_ior)
    } else {
        (ambient_ior, ior)
    };

    let sin_t = eta_i / eta_t * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    if sin_t >= 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let cos_i = cos_i.abs();
    let rs = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
    let rp = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);
    (rs * rs + rp * rp) / 2.0
}

/// Snell's law in vector form. `None` on total internal reflection.
///
/// The normal is flipped and the indices swapped when the ray is leaving the
/// material.
pub fn refract(incident: Vec3, normal: Vec3, ior: f32, ambient_ior: f32) -> Option<Vec3> {
    if ior <= 0.0 || ambient_ior <= 0.0 {
        return None;
    }
    let cos_i = incident.dot(normal).clamp(-1.0, 1.0);
    let (cos_i, eta_i, eta_t, n) = if cos_i < 0.0 {
        (-cos_i, ambient_ior, ior, normal)
    } else {
        (cos_i, ior, ambient_ior, -normal)
    };

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some((incident * eta + n * (eta * cos_i - k.sqrt())).normalize_or_zero())
}

/// Checkerboard of unit squares on the XZ plane: even cells black, odd white.
pub fn checker_color(point: Vec3) -> Color {
    let cell = (point.x.floor() + point.z.floor()) as i64;
    if cell.rem_euclid(2) == 0 {
        BLACK
    } else {
        WHITE
    }
}

/// Material as seen at `point`, with procedural patterns applied to a copy.
pub fn effective_material(material: &Material, point: Vec3) -> Material {
    let mut local = material.clone();
    if local.pattern == Pattern::Checkerboard {
        local.color = checker_color(point);
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
    }

    fn diffuse_sphere_scene() -> Scene {
        Scene::new()
            .with(Primitive::sphere(Vec3::ZERO, 1.0, Material::new(Color::ONE)))
            .with_light(Light::point(Vec3::new(0.0, 5.0, 0.0), Color::ONE))
    }

    #[test]
    fn test_north_pole_brighter_than_equator() {
        let scene = diffuse_sphere_scene();
        let config = RenderConfig {
            diffuse: true,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        let pole = shader.shade(Vec3::Y, -Vec3::Y, 0, 0);
        let equator = shader.shade(Vec3::X, -Vec3::X, 0, 0);

        assert!(pole.x > 0.0);
        assert!(pole.x > equator.x);
    }

    #[test]
    fn test_ambient_term() {
        let scene = diffuse_sphere_scene();
        let config = RenderConfig {
            ambient: true,
            ambient_light: 0.25,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        let c = shader.shade(Vec3::X, -Vec3::X, 0, 0);
        assert_eq!(c, Color::splat(0.25));
    }

    #[test]
    fn test_miss_returns_background_without_shading() {
        let scene = diffuse_sphere_scene();
        let config = RenderConfig {
            background: Color::new(0.1, 0.2, 0.3),
            ..RenderConfig::default()
        };
        let mut shader = Shader::new(&scene, &config);

        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Y);
        assert_eq!(shader.radiance(&ray), Color::new(0.1, 0.2, 0.3));

        let stats = shader.into_stats();
        assert_eq!(stats.camera_rays, 1);
        assert_eq!(stats.shade_calls, 0);
        assert_eq!(stats.shadow_rays, 0);
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        let mirror = Material::new(Color::ONE)
            .with_specular(0.5)
            .with_reflection(1.0);
        let scene = Scene::new()
            .with(Primitive::plane(Vec3::ZERO, Vec3::Z, mirror.clone()))
            .with(Primitive::plane(Vec3::new(0.0, 0.0, 2.0), -Vec3::Z, mirror));
        let config = RenderConfig {
            reflections: true,
            max_depth: 4,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        let color = shader.radiance(&Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z));
        assert_eq!(color, BLACK);

        let stats = shader.into_stats();
        assert_eq!(stats.max_depth, 4);
        assert_eq!(stats.shade_calls, 5);
        assert_eq!(stats.reflection_rays, 5);
        assert_eq!(stats.depth_limit_hits, 1);
    }

    /// Black mirror facing a red sphere that only ambient light reaches.
    fn mirror_facing_red_sphere() -> Scene {
        let mirror = Material::new(Color::ZERO)
            .with_specular(0.5)
            .with_reflection(0.3);
        Scene::new()
            .with(Primitive::plane(Vec3::ZERO, Vec3::Z, mirror))
            .with(Primitive::sphere(
                Vec3::new(0.0, 0.0, 3.0),
                1.0,
                Material::new(Color::new(1.0, 0.0, 0.0)),
            ))
    }

    #[test]
    fn test_mirror_adds_reflected_color_unweighted() {
        let scene = mirror_facing_red_sphere();
        let config = RenderConfig {
            ambient: true,
            ambient_light: 1.0,
            reflections: true,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        // Reflection weight is 0.3, but the red comes back at full strength
        let c = shader.shade(Vec3::ZERO, -Vec3::Z, 0, 0);
        assert_close(c.x, 1.0);
        assert_close(c.y, 0.0);
        assert_close(c.z, 0.0);
        assert_eq!(shader.stats().reflection_rays, 1);
    }

    #[test]
    fn test_reflections_switch_disables_mirror() {
        let scene = mirror_facing_red_sphere();
        let config = RenderConfig {
            ambient: true,
            ambient_light: 1.0,
            reflections: false,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        assert_eq!(shader.shade(Vec3::ZERO, -Vec3::Z, 0, 0), BLACK);
        assert_eq!(shader.stats().reflection_rays, 0);
        assert_eq!(shader.stats().shade_calls, 1);
    }

    #[test]
    fn test_mirror_needs_active_specular() {
        let scene = Scene::new()
            .with(Primitive::plane(
                Vec3::ZERO,
                Vec3::Z,
                Material::new(Color::ONE).with_reflection(1.0),
            ))
            .with(Primitive::plane(
                Vec3::new(0.0, 0.0, 2.0),
                -Vec3::Z,
                Material::new(Color::ONE).with_reflection(1.0),
            ));
        let config = RenderConfig::default();
        let mut shader = Shader::new(&scene, &config);

        shader.radiance(&Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z));
        assert_eq!(shader.stats().reflection_rays, 0);
    }

    #[test]
    fn test_shadowed_point_gets_no_diffuse() {
        let scene = Scene::new()
            .with(Primitive::plane(Vec3::ZERO, Vec3::Y, Material::new(Color::ONE)))
            .with(Primitive::sphere(
                Vec3::new(0.0, 2.0, 0.0),
                0.5,
                Material::default(),
            ))
            .with_light(Light::point(Vec3::new(0.0, 4.0, 0.0), Color::ONE));

        let lit = RenderConfig {
            diffuse: true,
            ..RenderConfig::default().unlit()
        };
        let shadowed = RenderConfig {
            shadows: true,
            ..lit.clone()
        };

        let mut shader = Shader::new(&scene, &lit);
        assert_close(shader.shade(Vec3::ZERO, -Vec3::Y, 0, 0).x, 0.25);

        let mut shader = Shader::new(&scene, &shadowed);
        assert_eq!(shader.shade(Vec3::ZERO, -Vec3::Y, 0, 0), BLACK);
        assert_eq!(shader.stats().shadow_rays, 1);

        // Off to the side the occluder no longer blocks the light
        let side = shader.shade(Vec3::new(3.0, 0.0, 0.0), -Vec3::Y, 0, 0);
        assert!(side.x > 0.0);
    }

    #[test]
    fn test_occluder_past_light_casts_no_shadow() {
        let scene = Scene::new()
            .with(Primitive::plane(Vec3::ZERO, Vec3::Y, Material::new(Color::ONE)))
            .with(Primitive::sphere(
                Vec3::new(0.0, 6.0, 0.0),
                0.5,
                Material::default(),
            ))
            .with_light(Light::point(Vec3::new(0.0, 4.0, 0.0), Color::ONE));
        let config = RenderConfig {
            diffuse: true,
            shadows: true,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        assert!(shader.shade(Vec3::ZERO, -Vec3::Y, 0, 0).x > 0.0);
    }

    #[test]
    fn test_occluder_just_behind_light_casts_no_shadow() {
        // Bottom of the sphere sits half a bias beyond the light
        let scene = Scene::new()
            .with(Primitive::plane(Vec3::ZERO, Vec3::Y, Material::new(Color::ONE)))
            .with(Primitive::sphere(
                Vec3::new(0.0, 4.505, 0.0),
                0.5,
                Material::default(),
            ))
            .with_light(Light::point(Vec3::new(0.0, 4.0, 0.0), Color::ONE));
        let config = RenderConfig {
            diffuse: true,
            shadows: true,
            bias: 0.01,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        assert_close(shader.shade(Vec3::ZERO, -Vec3::Y, 0, 0).x, 0.25);
        assert_eq!(shader.stats().shadow_rays, 1);
    }

    #[test]
    fn test_specular_highlight_faces_viewer() {
        let scene = Scene::new()
            .with(Primitive::plane(
                Vec3::ZERO,
                Vec3::Y,
                Material::new(Color::ZERO).with_specular(0.5),
            ))
            .with_light(Light::point(Vec3::new(0.0, 4.0, 0.0), Color::ONE).with_intensity(2.0));
        let config = RenderConfig {
            specular: true,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        // Looking straight down: half vector equals the normal
        let head_on = shader.shade(Vec3::ZERO, -Vec3::Y, 0, 0);
        assert_close(head_on.x, 2.0);

        // Grazing view: highlight vanishes
        let grazing = shader.shade(Vec3::ZERO, Vec3::new(1.0, -0.1, 0.0), 0, 0);
        assert!(grazing.x < 1e-3);
    }

    #[test]
    fn test_area_lights_are_skipped() {
        let scene = Scene::new()
            .with(Primitive::sphere(Vec3::ZERO, 1.0, Material::new(Color::ONE)))
            .with_light(
                Light::point(Vec3::new(0.0, 5.0, 0.0), Color::ONE).with_kind(LightKind::Area),
            );
        let config = RenderConfig {
            diffuse: true,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        assert_eq!(shader.shade(Vec3::Y, -Vec3::Y, 0, 0), BLACK);
        assert_eq!(shader.stats().skipped_lights, 1);
    }

    #[test]
    fn test_fresnel_normal_incidence() {
        let kr = fresnel(-Vec3::Z, Vec3::Z, 1.5, 1.0);
        assert!((kr - 0.04).abs() < 1e-4);

        // Same value leaving the material
        let kr = fresnel(Vec3::Z, Vec3::Z, 1.5, 1.0);
        assert!((kr - 0.04).abs() < 1e-4);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Leaving glass at 60 degrees from the normal
        let incident = Vec3::new(60f32.to_radians().sin(), 0.0, 60f32.to_radians().cos());
        assert_eq!(fresnel(incident, Vec3::Z, 1.5, 1.0), 1.0);
        assert!(refract(incident, Vec3::Z, 1.5, 1.0).is_none());

        // Entering at the same angle is fine
        let entering = Vec3::new(incident.x, 0.0, -incident.z);
        assert!(fresnel(entering, Vec3::Z, 1.5, 1.0) < 1.0);
        assert!(refract(entering, Vec3::Z, 1.5, 1.0).is_some());
    }

    #[test]
    fn test_refract_bends_toward_normal() {
        let straight = refract(-Vec3::Z, Vec3::Z, 1.5, 1.0).unwrap();
        assert!((straight + Vec3::Z).length() < 1e-5);

        let incident = Vec3::new(1.0, 0.0, -1.0).normalize();
        let bent = refract(incident, Vec3::Z, 1.5, 1.0).unwrap();
        let sin_i = incident.x;
        let sin_t = bent.x;
        assert_close(sin_i / sin_t, 1.5);
        assert!(bent.z < 0.0);
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_glass_sphere_transmits_background() {
        let glass = Material::new(Color::ONE)
            .with_reflection(0.5)
            .with_refraction(1.5);
        let scene = Scene::new().with(Primitive::sphere(Vec3::ZERO, 1.0, glass));
        let config = RenderConfig {
            refractions: true,
            background: Color::ONE,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        let c = shader.radiance(&Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z));

        // Two interfaces, each passing 96%
        assert_close(c.x, 0.96 * 0.96);
        assert_eq!(shader.stats().refraction_rays, 2);
        assert_eq!(shader.stats().max_depth, 1);
    }

    #[test]
    fn test_refractions_switch_disables_glass() {
        let glass = Material::new(Color::ONE)
            .with_reflection(0.5)
            .with_refraction(1.5);
        let scene = Scene::new().with(Primitive::sphere(Vec3::ZERO, 1.0, glass));
        let config = RenderConfig {
            refractions: false,
            background: Color::ONE,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        let c = shader.radiance(&Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z));

        assert_eq!(c, BLACK);
        assert_eq!(shader.stats().refraction_rays, 0);
        assert_eq!(shader.stats().total_internal_reflections, 0);
        assert_eq!(shader.stats().shade_calls, 1);
    }

    #[test]
    fn test_checker_color() {
        assert_eq!(checker_color(Vec3::new(0.5, 0.0, 0.5)), BLACK);
        assert_eq!(checker_color(Vec3::new(1.5, 0.0, 0.5)), WHITE);
        assert_eq!(checker_color(Vec3::new(-0.5, 0.0, 0.5)), WHITE);
        assert_eq!(checker_color(Vec3::new(-0.5, 3.0, -0.5)), BLACK);
    }

    #[test]
    fn test_checker_does_not_touch_stored_material() {
        let floor = Material::new(Color::new(0.3, 0.6, 0.9)).with_pattern(Pattern::Checkerboard);
        let scene = Scene::new().with(Primitive::plane(-Vec3::Y, Vec3::Y, floor.clone()));
        let config = RenderConfig {
            ambient: true,
            ambient_light: 1.0,
            ..RenderConfig::default().unlit()
        };
        let mut shader = Shader::new(&scene, &config);

        let even = shader.shade(Vec3::new(0.5, -1.0, 0.5), -Vec3::Y, 0, 0);
        let odd = shader.shade(Vec3::new(1.5, -1.0, 0.5), -Vec3::Y, 0, 0);

        assert_eq!(even, BLACK);
        assert_eq!(odd, WHITE);
        assert_eq!(scene.primitives()[0].material(), &floor);
    }

    #[test]
    fn test_stats_merge() {
        let mut a = RayStats {
            camera_rays: 2,
            max_depth: 3,
            ..Default::default()
        };
        let b = RayStats {
            camera_rays: 5,
            shadow_rays: 4,
            max_depth: 1,
            ..Default::default()
        };
        a.merge(&b);

        assert_eq!(a.camera_rays, 7);
        assert_eq!(a.total_rays(), 11);
        assert_eq!(a.max_depth, 3);
    }
}
