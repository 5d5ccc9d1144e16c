use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wirecast::colors;
use wirecast::{Framebuffer, Mesh, WireframeRenderer};

/// Render a wireframe of a 3D model to an image file.
#[derive(Parser)]
#[command(name = "wirecast")]
#[command(version, about)]
struct Cli {
    /// Path to the model file (Wavefront OBJ subset)
    model: PathBuf,

    /// Output image width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 1024)]
    height: u32,

    /// Output image path; the extension selects the format
    #[arg(long, default_value = "framebuffer.tga")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mesh = Mesh::from_obj(&cli.model)
        .with_context(|| format!("loading model {}", cli.model.display()))?;

    let mut framebuffer = Framebuffer::new(cli.width, cli.height, colors::BLACK);
    let renderer = WireframeRenderer::new(colors::WHITE, colors::RED);
    renderer
        .render(&mesh, &mut framebuffer)
        .context("rendering wireframe")?;

    framebuffer
        .write(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!(
        "rendered {} vertices / {} faces to {}",
        mesh.vertex_count(),
        mesh.face_count(),
        cli.output.display()
    );
    Ok(())
}
