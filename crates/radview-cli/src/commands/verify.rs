use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;
use radview_core::io::dicom::DicomFile;

#[derive(Args)]
pub struct VerifyArgs {
    /// DICOM file to check
    pub file: PathBuf,
}

pub fn run(args: &VerifyArgs) -> Result<()> {
    let ok = Style::new().green().bold();
    let label = Style::new().dim();

    let dicom = DicomFile::open(&args.file)?;

    println!(
        "{} {}",
        label.apply_to("File:     "),
        args.file.display()
    );
    println!(
        "{} {} bytes",
        label.apply_to("Size:     "),
        dicom.len()
    );
    println!(
        "{} {}",
        label.apply_to("Signature:"),
        ok.apply_to("OK (DICM magic at byte 128)")
    );

    Ok(())
}
