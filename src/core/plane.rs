use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::math::intersect_plane;

/// Infinite plane through `point`, facing `normal`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub point: DVec3,
    pub normal: DVec3,
    #[serde(default)]
    pub color: u32,
}

impl Plane {
    pub fn new(point: DVec3, normal: DVec3, color: u32) -> Self {
        Self { point, normal, color }
    }

    pub fn intersect(&self, ray_origin: DVec3, ray_dir: DVec3) -> Option<f64> {
        intersect_plane(ray_origin, ray_dir, self.point, self.normal)
    }

    /// Normal facing the side the ray came from
    pub fn normal_facing(&self, ray_dir: DVec3) -> DVec3 {
        let n = self.normal.normalize();
        if n.dot(ray_dir) > 0.0 {
            -n
        } else {
            n
        }
    }
}
