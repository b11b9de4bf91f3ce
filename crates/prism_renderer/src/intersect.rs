//! Nearest-hit resolution over an index-aligned list of distances.

use crate::hittable::Hittable;
use crate::primitive::Primitive;
use prism_math::{Interval, Ray};

/// Distance recorded for a primitive the ray misses.
///
/// Distance lists always hold one entry per primitive, so a miss has to be a
/// value rather than a gap.
pub const MISS: f32 = -1.0;

/// The primitive a ray reaches first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the scene's primitive list
    pub index: usize,
    /// Distance along the ray, in units of its direction vector
    pub distance: f32,
}

/// One distance per primitive, `MISS` where the ray does not hit it.
pub fn distances(ray: &Ray, primitives: &[Primitive]) -> Vec<f32> {
    primitives
        .iter()
        .map(|p| p.intersect(ray).unwrap_or(MISS))
        .collect()
}

/// Index of the smallest strictly positive distance.
///
/// With two or more entries the search is seeded from the largest distance
/// and walks the list lowering the threshold on `<=`, so when several
/// entries share the minimum the LAST one wins. Zero and negative distances
/// are misses.
pub fn closest_index(distances: &[f32]) -> Option<usize> {
    match distances {
        [] => None,
        [only] => (*only > 0.0).then_some(0),
        _ => {
            let max = distances
                .iter()
                .fold(0.0_f32, |max, &d| if max < d { d } else { max });
            if max <= 0.0 {
                return None;
            }

            let mut threshold = max;
            let mut index = 0;
            for (i, &d) in distances.iter().enumerate() {
                if d > 0.0 && d <= threshold {
                    threshold = d;
                    index = i;
                }
            }
            Some(index)
        }
    }
}

/// Nearest primitive in front of the ray origin.
pub fn closest_hit(ray: &Ray, primitives: &[Primitive]) -> Option<Hit> {
    let distances = distances(ray, primitives);
    closest_index(&distances).map(|index| Hit {
        index,
        distance: distances[index],
    })
}

/// True if any primitive is hit at a distance inside `window` (min excluded,
/// max included).
pub fn any_hit_within(ray: &Ray, primitives: &[Primitive], window: Interval) -> bool {
    primitives
        .iter()
        .filter_map(|p| p.intersect(ray))
        .any(|t| window.contains_after_min(t))
}
