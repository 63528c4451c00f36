use super::common::{settings, sphere_row};
use crate::scene::{AnimatorKind, Scene};

/// Sphere row with the light drifting out and back
pub fn create_default_scene() -> Scene {
    let scene = sphere_row("out/default.png", settings(AnimatorKind::LightDrift, 20, 2000));
    log::debug!("Default scene created: {} objects", scene.objects.len());
    scene
}
