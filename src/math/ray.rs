use glam::DVec3;

/// Hits closer than this are treated as self-intersections
pub const HIT_EPSILON: f64 = 1e-4;

/// Distance along `ray_dir` to the nearest sphere hit in front of the origin
pub fn intersect_sphere(ray_origin: DVec3, ray_dir: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let half_b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = (-half_b - sqrt_d) / a;
    if t > HIT_EPSILON {
        return Some(t);
    }

    let t = (-half_b + sqrt_d) / a;
    (t > HIT_EPSILON).then_some(t)
}

/// Distance along `ray_dir` to an infinite plane, `None` when parallel or behind the eye
pub fn intersect_plane(ray_origin: DVec3, ray_dir: DVec3, point: DVec3, normal: DVec3) -> Option<f64> {
    let vd = ray_dir.dot(normal);
    if vd.abs() < f64::EPSILON {
        return None;
    }

    let t = normal.dot(point - ray_origin) / vd;
    (t > HIT_EPSILON).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_sphere_hit() {
        let t = intersect_sphere(DVec3::ZERO, DVec3::Z, DVec3::new(0.0, 0.0, 5.0), 1.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_intersect_sphere_miss() {
        let t = intersect_sphere(DVec3::ZERO, DVec3::X, DVec3::new(0.0, 0.0, 5.0), 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_intersect_sphere_behind() {
        let t = intersect_sphere(DVec3::ZERO, DVec3::Z, DVec3::new(0.0, 0.0, -5.0), 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_intersect_sphere_from_inside() {
        let t = intersect_sphere(DVec3::ZERO, DVec3::X, DVec3::ZERO, 3.0);
        assert!((t.unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_intersect_plane_hit() {
        let t = intersect_plane(DVec3::ZERO, DVec3::NEG_Y, DVec3::new(0.0, -2.0, 0.0), DVec3::Y);
        assert!((t.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_intersect_plane_parallel() {
        let t = intersect_plane(DVec3::ZERO, DVec3::X, DVec3::new(0.0, -2.0, 0.0), DVec3::Y);
        assert!(t.is_none());
    }

    #[test]
    fn test_intersect_plane_behind() {
        let t = intersect_plane(DVec3::ZERO, DVec3::Y, DVec3::new(0.0, -2.0, 0.0), DVec3::Y);
        assert!(t.is_none());
    }
}
