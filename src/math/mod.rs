mod color;
mod ray;

pub use color::{hsv_to_rgb, pack_rgb, shade, unpack_rgb};
pub use ray::{intersect_plane, intersect_sphere, HIT_EPSILON};
