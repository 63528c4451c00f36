use glam::DVec3;

/// Split a packed `0xRRGGBB` value into channels in `[0, 1]`
pub fn unpack_rgb(rgb: u32) -> DVec3 {
    DVec3::new(
        ((rgb >> 16) & 0xFF) as f64 / 255.0,
        ((rgb >> 8) & 0xFF) as f64 / 255.0,
        (rgb & 0xFF) as f64 / 255.0,
    )
}

/// Pack channels in `[0, 1]` into `0xRRGGBB`, clamping out of range values
pub fn pack_rgb(color: DVec3) -> u32 {
    let c = (color.clamp(DVec3::ZERO, DVec3::ONE) * 255.0).round();
    (c.x as u32) << 16 | (c.y as u32) << 8 | c.z as u32
}

/// Scale a packed colour by a light intensity
pub fn shade(rgb: u32, intensity: f64) -> u32 {
    pack_rgb(unpack_rgb(rgb) * intensity)
}

pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> u32 {
    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    pack_rgb(DVec3::new(r + m, g + m, b + m))
}
