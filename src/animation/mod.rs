mod animator;
mod driver;

pub use animator::{
    direction, Direction, LightDrift, LightDriftPulse, TickAnimator, RADIUS_STEP, X_TICK_STEP,
    Y_TICK_STEP,
};
pub use driver::Animation;
