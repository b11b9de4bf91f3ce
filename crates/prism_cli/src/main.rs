//! Prism command line renderer.

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::Mesh;

mod cli;
mod demo;
mod settings;

use cli::{init_logger, Args};
use settings::Settings;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Prism v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::resolve(&args)?;

    let mut scene = demo::build_scene();
    if let Some(path) = &args.mesh {
        let mesh = Mesh::load_obj(path)
            .with_context(|| format!("Failed to load mesh {}", path.display()))?;
        scene.add(demo::mesh_primitive(mesh));
    }

    let camera = match &settings.camera {
        Some(camera) => camera.to_camera(),
        None => demo::camera(),
    };

    let output = prism_renderer::render(&camera, &scene, &settings.render)
        .context("Render failed")?;

    output
        .framebuffer
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    println!(
        "Rendered {}x{} in {:.2?} -> {}",
        output.framebuffer.width,
        output.framebuffer.height,
        output.elapsed,
        args.output.display()
    );

    Ok(())
}
