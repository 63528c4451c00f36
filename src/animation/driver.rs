use std::path::PathBuf;

use anyhow::{Context, Result};
use image::RgbImage;

use super::animator::TickAnimator;
use crate::core::Stopwatch;
use crate::frame::{Frame, Ticks};
use crate::output::write_gif;
use crate::renderer::Renderer;
use crate::scene::{AnimationSettings, Scene};

/// Drives a tick animator over a scene and collects the rendered frames
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    settings: AnimationSettings,
}

impl Animation {
    pub fn new(settings: AnimationSettings) -> Self {
        Self { settings }
    }

    /// `None` for still scenes
    pub fn from_scene(scene: &Scene) -> Option<Self> {
        scene.animation.map(Self::new)
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Display time of one frame: the total duration spread over all ticks
    pub fn frame_delay_ms(&self) -> u32 {
        self.settings.duration / self.settings.ticks.max(1)
    }

    /// Runs every tick: animate the scene in place, then render it.
    ///
    /// The first animator error stops the run; ticks already applied stay applied.
    pub fn run<F>(&self, scene: &mut Scene, animator: &dyn TickAnimator, mut render: F) -> Result<Vec<Frame>>
    where
        F: FnMut(&Scene) -> RgbImage,
    {
        let ticks = self.settings.ticks;
        log::info!("Animation starting: {} ticks with {}", ticks, animator.name());

        let mut stopwatch = Stopwatch::start();
        let mut frames = Vec::new();
        for tick in Ticks::new(ticks) {
            animator
                .animate(scene, tick.index, tick.total)
                .with_context(|| format!("Animator {} failed at tick {}/{}", animator.name(), tick.index, ticks))?;
            log::debug!("Tick {}/{}: lights={:?}", tick.index, ticks, scene.lights);

            frames.push(Frame::new(tick, render(scene)));
            log::debug!("Tick {}/{} done in {}ms", tick.index, ticks, stopwatch.lap().as_millis());
        }

        Ok(frames)
    }

    /// Runs the animation with `renderer` and writes the GIF next to the scene output
    pub fn run_to_file(&self, scene: &mut Scene, animator: &dyn TickAnimator, renderer: &Renderer) -> Result<PathBuf> {
        let stopwatch = Stopwatch::start();
        let frames = self.run(scene, animator, |s| renderer.render(s))?;

        let path = scene.animation_path();
        write_gif(&frames, &path, self.frame_delay_ms(), self.settings.looping)?;
        log::info!("Animation written in {}ms", stopwatch.elapsed().as_millis());
        Ok(path)
    }
}
