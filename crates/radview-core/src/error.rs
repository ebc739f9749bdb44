use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    #[error("Not a DICOM file: {0}")]
    UnsupportedSignature(String),

    #[error("An export is already in flight")]
    ExportInFlight,

    #[error("No DICOM source available for export")]
    NoExportSource,

    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RadViewError>;
