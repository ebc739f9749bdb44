use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use radview_core::io::manifest::FrameManifest;

#[derive(Args)]
pub struct InfoArgs {
    /// Frame manifest (TOML)
    pub manifest: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let manifest = FrameManifest::load(&args.manifest)?;

    println!("Manifest:    {}", args.manifest.display());
    println!("Dimensions:  {}x{}", manifest.width, manifest.height);
    println!("Bit depth:   {}", manifest.bit_depth);
    println!(
        "Rescale:     slope {} intercept {}",
        manifest.rescale.slope, manifest.rescale.intercept
    );
    println!(
        "Window:      center {} width {}",
        manifest.window.center, manifest.window.width
    );
    println!("Markers:     {}", manifest.markers.len());

    if let Some(ref study) = manifest.study {
        println!("Study:       {}", study);
    }
    if let Some(ref weld) = manifest.weld_id {
        println!("Weld:        {}", weld);
    }
    if let Some(path) = manifest.source_dicom_path(&args.manifest) {
        println!("DICOM:       {}", path.display());
    }

    let dump = manifest.data_path(&args.manifest);
    let dump_bytes = manifest.width * manifest.height * manifest.bytes_per_sample();
    println!("Dump:        {}", dump.display());
    println!(
        "Dump size:   {:.1} MB",
        dump_bytes as f64 / (1024.0 * 1024.0)
    );

    Ok(())
}
