//! Parallel render driver.
//!
//! The flattened pixel range is cut into one contiguous chunk per worker.
//! Each worker owns a disjoint slice of the framebuffer and its own
//! `Shader`, so no locking is needed; the only shared state is the
//! read-only scene and configuration, plus an atomic count of finished
//! pixels for the progress readout.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::camera::Camera;
use crate::color::{to_rgb8, BLACK};
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::framebuffer::Framebuffer;
use crate::scene::Scene;
use crate::shading::{RayStats, Shader};
use prism_core::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Finished image plus what it took to make it.
#[derive(Debug)]
pub struct RenderOutput {
    pub framebuffer: Framebuffer,
    pub stats: RayStats,
    pub elapsed: Duration,
}

/// Finished-pixel counter shared by the render workers.
struct Progress {
    done: AtomicUsize,
    total: usize,
}

impl Progress {
    /// Percent granularity of the readout.
    const STEP: usize = 10;

    fn new(total: usize) -> Self {
        Self {
            done: AtomicUsize::new(0),
            total,
        }
    }

    /// Record `n` more finished pixels.
    ///
    /// Returns the completion percentage when this call crosses a `STEP`
    /// mark. Each mark is reported by exactly one caller.
    fn advance(&self, n: usize) -> Option<usize> {
        if self.total == 0 || n == 0 {
            return None;
        }
        let before = self.done.fetch_add(n, Ordering::Relaxed);
        let mark = |done: usize| done.min(self.total) * 100 / self.total / Self::STEP;
        let (from, to) = (mark(before), mark(before + n));
        (to > from).then_some(to * Self::STEP)
    }

    fn done(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }
}

/// Split `0..total` into `workers` contiguous ranges of `total / workers`
/// items, the remainder going to the last range.
///
/// Never produces more ranges than items.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    if total == 0 {
        return Vec::new();
    }
    let workers = workers.clamp(1, total);
    let chunk = total / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i + 1 == workers { total } else { start + chunk };
            start..end
        })
        .collect()
}

/// Render `scene` as seen by `camera`.
///
/// Resolution and field of view come from `config`; the camera supplies
/// position and orientation.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<RenderOutput> {
    config.validate()?;

    let camera = camera
        .clone()
        .with_fov(config.fov)
        .with_resolution(config.width, config.height);

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = config.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let ranges = partition(config.pixel_count(), pool.current_num_threads());
    log::info!(
        "Rendering {}x{} with {} workers, {} samples per pixel, max depth {}",
        config.width,
        config.height,
        ranges.len(),
        config.samples_per_pixel(),
        config.max_depth
    );
    log::debug!(
        "Scene: {} primitives, {} lights",
        scene.len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let progress = Progress::new(config.pixel_count());
    let mut framebuffer = Framebuffer::new(config.width, config.height);

    // Hand each worker its own slice of the pixel storage
    let mut chunks = Vec::with_capacity(ranges.len());
    let mut rest = framebuffer.pixels_mut();
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        chunks.push((range, head));
        rest = tail;
    }

    let stats = pool.install(|| {
        chunks
            .into_par_iter()
            .map(|(range, pixels)| render_range(&camera, scene, config, &progress, range, pixels))
            .reduce(RayStats::default, |mut total, worker| {
                total.merge(&worker);
                total
            })
    });

    let elapsed = start.elapsed();
    debug_assert_eq!(progress.done(), config.pixel_count());
    log::info!("Rendered in {:.2?}: {}", elapsed, stats);
    if stats.skipped_lights > 0 {
        log::warn!(
            "Area lights are not supported; skipped {} light evaluations",
            stats.skipped_lights
        );
    }
    if stats.total_internal_reflections > 0 {
        log::debug!("{} total internal reflections", stats.total_internal_reflections);
    }

    Ok(RenderOutput {
        framebuffer,
        stats,
        elapsed,
    })
}

/// Render the pixels `range` of the flattened image into `pixels`.
///
/// Finished pixels are reported to `progress` once per image row.
fn render_range(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    progress: &Progress,
    range: Range<usize>,
    pixels: &mut [[u8; 3]],
) -> RayStats {
    log::debug!("Worker rendering pixels {}..{}", range.start, range.end);

    let width = config.width as usize;
    let mut shader = Shader::new(scene, config);
    let mut pending = 0;

    for (index, pixel) in range.clone().zip(pixels.iter_mut()) {
        let x = (index % width) as u32;
        let y = (index / width) as u32;
        *pixel = to_rgb8(render_pixel(&mut shader, camera, x, y));

        pending += 1;
        if pending == width {
            report(progress, pending);
            pending = 0;
        }
    }
    report(progress, pending);

    log::debug!("Worker finished pixels {}..{}", range.start, range.end);
    shader.into_stats()
}

fn report(progress: &Progress, finished: usize) {
    if let Some(percent) = progress.advance(finished) {
        log::info!("Completion: {}%", percent);
    }
}

/// Average of the S x S samples for pixel (x, y).
///
/// Samples sit at the centers of an S x S grid of sub-pixel cells, or at a
/// random position inside each cell when jitter is on. Every sample is
/// clipped before averaging.
pub fn render_pixel(shader: &mut Shader<'_>, camera: &Camera, x: u32, y: u32) -> Color {
    let config = shader.config();
    let s = config.samples.max(1);
    let width = config.width as f32;
    let height = config.height as f32;

    // Seeded per pixel so a render does not depend on how it was split
    let mut rng = config.jitter.then(|| {
        let index = y as u64 * config.width as u64 + x as u64;
        StdRng::seed_from_u64(config.seed ^ index)
    });

    let mut sum = BLACK;
    for j in 0..s {
        for i in 0..s {
            let (ox, oy) = match rng.as_mut() {
                Some(rng) => (rng.gen::<f32>(), rng.gen::<f32>()),
                None => (0.5, 0.5),
            };
            let sx = (x as f32 + (i as f32 + ox) / s as f32) / width;
            let sy = (y as f32 + (j as f32 + oy) / s as f32) / height;
            sum += shader.radiance(&camera.ray(sx, sy));
        }
    }

    sum / (s * s) as f32
}
