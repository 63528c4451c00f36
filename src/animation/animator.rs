use crate::error::AnimationError;
use crate::frame::Tick;
use crate::scene::{AnimatorKind, Scene};

/// Per-tick step of `lights[0].x`
pub const X_TICK_STEP: f64 = 0.1;
/// Per-tick step of `lights[0].y`
pub const Y_TICK_STEP: f64 = 0.2;
/// Per-tick step of the pulsing object's radius
pub const RADIUS_STEP: f64 = 0.05;

const DRIFT_LIGHT: usize = 0;
const PULSE_OBJECT: usize = 2;

/// Sign applied to every step, flipped once at the animation midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// `Backward` once `tick > ticks / 2`, `Forward` otherwise
pub fn direction(tick: u32, ticks: u32) -> Direction {
    if Tick::new(tick, ticks).is_past_midpoint() {
        Direction::Backward
    } else {
        Direction::Forward
    }
}

/// Callback invoked once per animation tick.
///
/// Implementations are stateless: everything they need comes from the
/// arguments, and the scene is mutated in place. Steps are additive, so
/// calling twice with the same tick applies the step twice.
pub trait TickAnimator {
    fn animate(&self, scene: &mut Scene, tick: u32, ticks: u32) -> Result<(), AnimationError>;

    fn name(&self) -> &str {
        "animator"
    }
}

/// Moves `lights[0]` up and to the right, then back after the midpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct LightDrift;

impl TickAnimator for LightDrift {
    fn animate(&self, scene: &mut Scene, tick: u32, ticks: u32) -> Result<(), AnimationError> {
        let step = direction(tick, ticks).sign();
        let light = scene.light_mut(DRIFT_LIGHT)?;
        light.y += Y_TICK_STEP * step;
        light.x += X_TICK_STEP * step;
        Ok(())
    }

    fn name(&self) -> &str {
        "light-drift"
    }
}

/// [`LightDrift`] plus growing `objects[2]`, shrinking it after the midpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct LightDriftPulse;

impl TickAnimator for LightDriftPulse {
    fn animate(&self, scene: &mut Scene, tick: u32, ticks: u32) -> Result<(), AnimationError> {
        // Both targets must exist before anything is written.
        scene.radius_mut(PULSE_OBJECT)?;
        LightDrift.animate(scene, tick, ticks)?;

        *scene.radius_mut(PULSE_OBJECT)? += RADIUS_STEP * direction(tick, ticks).sign();
        Ok(())
    }

    fn name(&self) -> &str {
        "light-drift-pulse"
    }
}

impl AnimatorKind {
    pub fn animator(self) -> &'static dyn TickAnimator {
        match self {
            AnimatorKind::LightDrift => &LightDrift,
            AnimatorKind::LightDriftPulse => &LightDriftPulse,
        }
    }
}
