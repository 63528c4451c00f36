pub mod animation;
pub mod camera;
pub mod cli;
pub mod core;
pub mod error;
pub mod frame;
pub mod math;
pub mod output;
pub mod renderer;
pub mod scene;
pub mod scenes;

pub use animation::{Animation, LightDrift, LightDriftPulse, TickAnimator};
pub use error::{AnimationError, SceneError};
pub use renderer::Renderer;
pub use scene::{Light, Scene, SceneObject};
pub use scenes::{create_default_scene, create_pulse_scene};
