use crate::{Interval, Ray, Vec3};

/// Axis-aligned bounding box, one interval per axis.
///
/// Used directly as the box primitive's geometry and as a cheap reject test
/// in front of triangle meshes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));
        Self::new(x, y, z)
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Clip a ray against the box with the slab method.
    ///
    /// Returns the parameter range `[t_enter, t_exit]` over which the ray is
    /// inside the box, narrowed to `ray_t`, or `None` if the ray misses.
    /// Axes the ray runs parallel to are handled explicitly instead of
    /// relying on `0 * inf`.
    pub fn clip(&self, r: &Ray, ray_t: Interval) -> Option<Interval> {
        let mut span = ray_t;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let orig = r.origin[axis];
            let dir = r.direction[axis];

            if dir == 0.0 {
                if !slab.contains(orig) {
                    return None;
                }
                continue;
            }

            let adinv = 1.0 / dir;
            let mut t0 = (slab.min - orig) * adinv;
            let mut t1 = (slab.max - orig) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            span = span.overlap(&Interval::new(t0, t1));
            if span.max < span.min {
                return None;
            }
        }

        Some(span)
    }

    /// Test if a ray intersects this AABB within the given interval.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> bool {
        self.clip(r, ray_t).is_some()
    }

    /// Pad intervals to avoid zero-width AABBs (flat triangles, axis planes).
    fn pad_to_minimums(&mut self) {
        const DELTA: f32 = 0.0001;
        for slab in [&mut self.x, &mut self.y, &mut self.z] {
            if slab.size() < DELTA {
                *slab = Interval::new(slab.min - DELTA / 2.0, slab.max + DELTA / 2.0);
            }
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        (self.min() + self.max()) * 0.5
    }

    /// Half the box extent along each axis.
    pub fn half_extent(&self) -> Vec3 {
        (self.max() - self.min()) * 0.5
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}
