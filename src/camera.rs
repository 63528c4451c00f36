use glam::DVec3;

use crate::scene::Scene;

/// Pinhole camera producing one primary ray per pixel
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: DVec3,
    forward: DVec3,
    right: DVec3,
    up: DVec3,
    half_width: f64,
    half_height: f64,
    width: u32,
    height: u32,
}

impl Camera {
    /// `fov` is the horizontal field of view in degrees
    pub fn new(position: DVec3, look_at: DVec3, fov: f64, width: u32, height: u32) -> Self {
        let forward = (look_at - position).try_normalize().unwrap_or(DVec3::Z);
        // Looking straight up or down leaves Y useless as a reference
        let reference = if forward.cross(DVec3::Y).length_squared() < 1e-12 {
            DVec3::Z
        } else {
            DVec3::Y
        };
        let right = forward.cross(reference).normalize();
        let up = right.cross(forward);

        let half_width = (fov.to_radians() / 2.0).tan();
        let aspect = width as f64 / height.max(1) as f64;

        Self {
            position,
            forward,
            right,
            up,
            half_width,
            half_height: half_width / aspect,
            width,
            height,
        }
    }

    pub fn from_scene(scene: &Scene) -> Self {
        Self::new(scene.camera, scene.look_at, scene.fov, scene.width, scene.height)
    }

    /// Normalized direction through the centre of pixel (x, y); row 0 is the top
    pub fn ray(&self, x: u32, y: u32) -> DVec3 {
        let u = (2.0 * (x as f64 + 0.5) / self.width as f64 - 1.0) * self.half_width;
        let v = (1.0 - 2.0 * (y as f64 + 0.5) / self.height as f64) * self.half_height;
        (self.forward + self.right * u + self.up * v).normalize()
    }
}
