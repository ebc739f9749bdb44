use std::path::PathBuf;

use radview_core::frame::VoiWindow;
use radview_core::io::manifest::FrameManifest;
use radview_core::raster::DisplayRaster;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Load a frame manifest, decode its frame, and hand back the raster.
    LoadManifest { path: PathBuf },

    /// Load an already rendered preview image as the raster.
    LoadImage { path: PathBuf },

    /// Re-window the cached frame with new VOI attributes.
    Rewindow { window: VoiWindow },

    /// Write a validated copy of the source DICOM binary into `dir`.
    ExportDicom {
        source: PathBuf,
        dir: PathBuf,
        name: String,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ManifestLoaded {
        path: PathBuf,
        manifest: FrameManifest,
        raster: DisplayRaster,
    },
    ImageLoaded {
        path: PathBuf,
        raster: DisplayRaster,
    },
    RewindowComplete {
        raster: DisplayRaster,
    },
    ExportComplete {
        path: PathBuf,
    },
    /// The save dialog was dismissed; clears the export guard.
    ExportCanceled,
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
