use anyhow::{Context, Result};
use clap::Parser;

use ray_animator::animation::Animation;
use ray_animator::cli::Cli;
use ray_animator::output::write_png;
use ray_animator::renderer::Renderer;
use ray_animator::scene::Scene;

fn load_scene(cli: &Cli) -> Result<Scene> {
    let mut scene = match &cli.scene {
        Some(path) => Scene::from_path(path).with_context(|| format!("Failed to load scene {:?}", path))?,
        None => cli.preset.build(),
    };
    if let Some(output) = &cli.output {
        scene.filename = output.clone();
    }
    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Application starting");

    let mut scene = load_scene(&cli)?;
    let renderer = cli.threads.map(Renderer::new).unwrap_or_default();
    log::info!(
        "Rendering {}x{} with {} objects, {} lights on {} threads",
        scene.width,
        scene.height,
        scene.objects.len(),
        scene.lights.len(),
        renderer.threads()
    );

    match Animation::from_scene(&scene).filter(|_| !cli.still) {
        Some(animation) => {
            let animator = animation.settings().animator.animator();
            let path = animation.run_to_file(&mut scene, animator, &renderer)?;
            println!("Animation written to {}", path.display());
        }
        None => {
            let image = renderer.render(&scene);
            write_png(&image, &scene.filename)?;
            println!("Image written to {}", scene.filename.display());
        }
    }

    log::info!("Application finished");
    Ok(())
}
