use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::math::intersect_sphere;

/// Sphere primitive with packed `0xRRGGBB` colour
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
    #[serde(default)]
    pub color: u32,
}

impl Sphere {
    pub fn new(center: DVec3, radius: f64, color: u32) -> Self {
        Self { center, radius, color }
    }

    pub fn intersect(&self, ray_origin: DVec3, ray_dir: DVec3) -> Option<f64> {
        intersect_sphere(ray_origin, ray_dir, self.center, self.radius)
    }

    /// Get normal at point on sphere surface
    pub fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalize()
    }
}
