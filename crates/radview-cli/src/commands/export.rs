use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;
use radview_core::io::export::{export_to_dir, ExportSources};

#[derive(Args)]
pub struct ExportArgs {
    /// Source DICOM file
    pub file: PathBuf,

    /// Destination directory
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Output file name (".dcm" appended when missing)
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let name = match &args.name {
        Some(n) => n.clone(),
        None => args
            .file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".into()),
    };

    let dest = export_to_dir(
        ExportSources::from_file(args.file.clone()),
        &name,
        &args.output_dir,
    )?;

    let ok = Style::new().green().bold();
    println!("{} {}", ok.apply_to("Exported"), dest.display());
    Ok(())
}
