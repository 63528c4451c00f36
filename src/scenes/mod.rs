mod common;
mod default;
mod pulse;

use clap::ValueEnum;

pub use default::create_default_scene;
pub use pulse::create_pulse_scene;

/// Built-in scenes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Default,
    Pulse,
}

impl Preset {
    pub fn build(self) -> crate::scene::Scene {
        match self {
            Preset::Default => create_default_scene(),
            Preset::Pulse => create_pulse_scene(),
        }
    }
}
