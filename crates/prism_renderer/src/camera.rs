//! Pinhole camera for primary ray generation.

use prism_math::{Mat3, Ray, Vec3};

/// Camera looking from one point at another.
///
/// Screen coordinates are normalized: `(0, 0)` is the top-left corner of the
/// image, `(1, 1)` the bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    vfov: f32, // Vertical field of view in degrees
    aspect: f32,

    // Cached from the settings above
    basis: Mat3,
    half_height: f32,
}

impl Camera {
    /// Camera at `look_from` aimed at `look_at`, Y up, 60 degree field of
    /// view, 4:3 image.
    pub fn new(look_from: Vec3, look_at: Vec3) -> Self {
        let mut camera = Self {
            look_from,
            look_at,
            vup: Vec3::Y,
            vfov: 60.0,
            aspect: 4.0 / 3.0,
            basis: Mat3::IDENTITY,
            half_height: 1.0,
        };
        camera.update();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.update();
        self
    }

    pub fn with_up(mut self, vup: Vec3) -> Self {
        self.vup = vup;
        self.update();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.update();
        self
    }

    /// Match the aspect ratio of a `width` x `height` image.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.look_from
    }

    pub fn target(&self) -> Vec3 {
        self.look_at
    }

    pub fn fov(&self) -> f32 {
        self.vfov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Camera-to-world rotation: columns are right, up, forward.
    pub fn basis(&self) -> Mat3 {
        self.basis
    }

    /// Unit world-space direction through screen point `(sx, sy)`.
    pub fn direction(&self, sx: f32, sy: f32) -> Vec3 {
        let x = (2.0 * sx - 1.0) * self.half_height * self.aspect;
        let y = (1.0 - 2.0 * sy) * self.half_height;
        (self.basis * Vec3::new(x, y, 1.0)).normalize_or_zero()
    }

    /// Primary ray through screen point `(sx, sy)`.
    pub fn ray(&self, sx: f32, sy: f32) -> Ray {
        Ray::new(self.look_from, self.direction(sx, sy))
    }

    fn update(&mut self) {
        self.half_height = (self.vfov.to_radians() / 2.0).tan();

        let forward = (self.look_at - self.look_from)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        // Up vector parallel to the view direction: any perpendicular will do
        let right = self
            .vup
            .cross(forward)
            .try_normalize()
            .unwrap_or_else(|| forward.any_orthonormal_vector());
        let up = forward.cross(right);

        self.basis = Mat3::from_cols(right, up, forward);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}
