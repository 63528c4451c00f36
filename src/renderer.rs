use std::num::NonZeroUsize;
use std::thread;

use glam::DVec3;
use image::RgbImage;

use crate::camera::Camera;
use crate::core::{pixels_per_ms, Stopwatch};
use crate::math::shade;
use crate::scene::{Scene, SceneObject};

/// Light every surface receives regardless of orientation
pub const AMBIENT: f64 = 0.15;

/// Nearest intersection along a ray
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub distance: f64,
    pub object: &'a SceneObject,
}

/// CPU ray tracer, parallelized over image rows
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    threads: usize,
}

impl Renderer {
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }

    pub fn with_available_parallelism() -> Self {
        let threads = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::new(threads)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn render(&self, scene: &Scene) -> RgbImage {
        let (width, height) = (scene.width, scene.height);
        if width == 0 || height == 0 {
            log::warn!("Nothing to render for a {}x{} image", width, height);
            return RgbImage::new(width, height);
        }

        let stopwatch = Stopwatch::start();
        let camera = Camera::from_scene(scene);

        let mut image = RgbImage::new(width, height);
        let row_bytes = width as usize * 3;
        let rows_per_job = (height as usize).div_ceil(self.threads).max(1);

        let pixels: &mut [u8] = &mut image;
        thread::scope(|s| {
            for (job, rows) in pixels.chunks_mut(row_bytes * rows_per_job).enumerate() {
                let camera = &camera;
                s.spawn(move || {
                    for (offset, row) in rows.chunks_mut(row_bytes).enumerate() {
                        let y = (job * rows_per_job + offset) as u32;
                        for (x, pixel) in row.chunks_mut(3).enumerate() {
                            let rgb = trace(scene, camera.position, camera.ray(x as u32, y));
                            pixel[0] = (rgb >> 16) as u8;
                            pixel[1] = (rgb >> 8) as u8;
                            pixel[2] = rgb as u8;
                        }
                    }
                });
            }
        });

        let elapsed = stopwatch.elapsed();
        let count = u64::from(width) * u64::from(height);
        log::info!(
            "pixel={}, duration={}ms, pixel per ms = {}",
            count,
            elapsed.as_millis(),
            pixels_per_ms(count, elapsed)
        );

        image
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}

/// Closest object hit by the ray, if any
pub fn nearest_hit(scene: &Scene, origin: DVec3, dir: DVec3) -> Option<Hit<'_>> {
    scene
        .objects
        .iter()
        .filter_map(|object| {
            object
                .intersect(origin, dir)
                .map(|distance| Hit { distance, object })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Packed colour seen along a primary ray
pub fn trace(scene: &Scene, origin: DVec3, dir: DVec3) -> u32 {
    let Some(hit) = nearest_hit(scene, origin, dir) else {
        return scene.background;
    };

    let point = origin + dir * hit.distance;
    let normal = hit.object.normal_at(point, dir);
    shade(hit.object.color(), intensity(scene, point, normal))
}

/// Lambert intensity at `point`, averaged over all unshadowed lights
fn intensity(scene: &Scene, point: DVec3, normal: DVec3) -> f64 {
    if scene.lights.is_empty() {
        return 1.0;
    }

    let diffuse: f64 = scene
        .lights
        .iter()
        .map(|light| {
            let to_light = light.position() - point;
            let distance = to_light.length();
            let l = to_light / distance;
            let shadowed = nearest_hit(scene, point, l).is_some_and(|h| h.distance < distance);
            if shadowed {
                0.0
            } else {
                normal.dot(l).max(0.0)
            }
        })
        .sum::<f64>()
        / scene.lights.len() as f64;

    AMBIENT + (1.0 - AMBIENT) * diffuse
}
