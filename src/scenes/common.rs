use glam::DVec3;

use crate::core::{Plane, Sphere};
use crate::math::hsv_to_rgb;
use crate::scene::{AnimationSettings, AnimatorKind, Light, Scene, SceneObject};

pub const PRESET_WIDTH: u32 = 320;
pub const PRESET_HEIGHT: u32 = 240;

pub fn generate_hue(color_seed: u32) -> f64 {
    (color_seed as f64 * 0.618033988749895) % 1.0
}

pub fn generate_color(color_seed: u32) -> u32 {
    hsv_to_rgb(generate_hue(color_seed), 0.7, 0.95)
}

/// Three spheres in a row above a floor, lit from the upper left.
/// `objects[2]` is the centre sphere.
pub fn sphere_row(filename: &str, animation: AnimationSettings) -> Scene {
    let spheres = [
        (DVec3::new(-1.8, 0.0, 0.5), 0.8),
        (DVec3::new(1.8, 0.0, 0.5), 0.8),
        (DVec3::new(0.0, 0.2, 0.0), 1.0),
    ];

    let objects = spheres
        .iter()
        .enumerate()
        .map(|(i, &(center, radius))| SceneObject::from(Sphere::new(center, radius, generate_color(i as u32 + 1))))
        .chain(std::iter::once(SceneObject::from(Plane::new(
            DVec3::new(0.0, -1.0, 0.0),
            DVec3::Y,
            0x9A9A9A,
        ))))
        .collect();

    Scene {
        width: PRESET_WIDTH,
        height: PRESET_HEIGHT,
        filename: filename.into(),
        camera: DVec3::new(0.0, 1.0, -6.0),
        look_at: DVec3::ZERO,
        fov: 60.0,
        background: 0x0B0E1A,
        lights: vec![Light::new(-3.0, 4.0, -4.0)],
        objects,
        animation: Some(animation),
    }
}

pub fn settings(animator: AnimatorKind, ticks: u32, duration: u32) -> AnimationSettings {
    AnimationSettings {
        animator,
        ticks,
        duration,
        looping: true,
    }
}
