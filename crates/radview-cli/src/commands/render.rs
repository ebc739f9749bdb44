use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use radview_core::frame::VoiWindow;
use radview_core::io::manifest::FrameManifest;
use radview_core::io::raster_io::save_png;
use radview_core::windowing::decode_with;

#[derive(Args)]
pub struct RenderArgs {
    /// Frame manifest (TOML)
    pub manifest: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Override the window center
    #[arg(long)]
    pub center: Option<f32>,

    /// Override the window width
    #[arg(long)]
    pub width: Option<f32>,

    /// Invert grayscale in the output
    #[arg(long)]
    pub invert: bool,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let manifest = FrameManifest::load(&args.manifest)?;
    let frame = manifest.load_frame(&args.manifest)?;

    let window = VoiWindow {
        center: args.center.unwrap_or(frame.window.center),
        width: args.width.unwrap_or(frame.window.width),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!(
        "Windowing {}x{} frame (center {}, width {})",
        frame.width(),
        frame.height(),
        window.center,
        window.width
    ));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let raster = decode_with(&frame, window)?;
    let raster = if args.invert { raster.inverted() } else { raster };
    save_png(&raster, &args.output)?;

    pb.finish_with_message(format!("Saved {}", args.output.display()));
    Ok(())
}
