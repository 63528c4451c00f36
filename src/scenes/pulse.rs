use super::common::{settings, sphere_row};
use crate::scene::{AnimatorKind, Scene};

/// Default scene plus the centre sphere growing and shrinking
pub fn create_pulse_scene() -> Scene {
    let scene = sphere_row("out/pulse.png", settings(AnimatorKind::LightDriftPulse, 30, 3000));
    log::debug!("Pulse scene created: {} objects", scene.objects.len());
    scene
}
