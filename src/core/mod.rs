pub mod plane;
pub mod sphere;
pub mod stopwatch;

pub use plane::Plane;
pub use sphere::Sphere;
pub use stopwatch::{pixels_per_ms, Stopwatch};
